//! Depth-first pre/post-order traversal of a [`SyntaxNode`] tree.

use crate::syntax::SyntaxNode;

/// Receives `enter`/`exit` events in document order.
pub trait TreeListener<N: SyntaxNode> {
    type Error;

    fn enter(&mut self, node: &N) -> Result<(), Self::Error>;

    fn exit(&mut self, node: &N) -> Result<(), Self::Error>;
}

/// Walk `root`, entering every node before its children and exiting it
/// after them. The first listener error stops the walk.
///
/// # Errors
/// Returns whatever error the listener raised.
pub fn walk<N, L>(root: &N, listener: &mut L) -> Result<(), L::Error>
where
    N: SyntaxNode,
    L: TreeListener<N>,
{
    listener.enter(root)?;
    for child in root.children() {
        walk(child, listener)?;
    }
    listener.exit(root)
}
