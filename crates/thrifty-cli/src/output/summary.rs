//! Indented text outline of a document.
//!
//! ```text
//! calc.thrift
//!   // Simple calculator.
//!   service Calc
//!     add(a: i32, b: i32) -> i32 throws Overflow
//! ```

use std::fmt;

use thrifty_model::{Attribute, Declaration, Document, Method};

pub struct Summary<'a>(pub &'a Document);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.name())?;
        for declaration in self.0 {
            write_comment(f, 1, declaration.comment())?;
            writeln!(f, "  {} {}", declaration.kind(), declaration.name())?;
            match declaration {
                Declaration::Enum(e) => {
                    for value in &e.values {
                        writeln!(f, "    {value}")?;
                    }
                }
                Declaration::Struct(s) => write_attributes(f, &s.attributes)?,
                Declaration::Exception(e) => write_attributes(f, &e.attributes)?,
                Declaration::Service(s) => {
                    for method in &s.methods {
                        write_method(f, method)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_comment(f: &mut fmt::Formatter<'_>, depth: usize, comment: Option<&str>) -> fmt::Result {
    let Some(comment) = comment else {
        return Ok(());
    };
    let indent = "  ".repeat(depth);
    for line in comment.lines() {
        if line.is_empty() {
            writeln!(f, "{indent}//")?;
        } else {
            writeln!(f, "{indent}// {line}")?;
        }
    }
    Ok(())
}

fn write_attributes(f: &mut fmt::Formatter<'_>, attributes: &[Attribute]) -> fmt::Result {
    for attribute in attributes {
        write_comment(f, 2, attribute.comment.as_deref())?;
        writeln!(f, "    {}: {}", attribute.name, attribute.type_ref)?;
    }
    Ok(())
}

fn write_method(f: &mut fmt::Formatter<'_>, method: &Method) -> fmt::Result {
    write_comment(f, 2, method.comment.as_deref())?;
    let parameters = method
        .parameters
        .iter()
        .map(|p| format!("{}: {}", p.name, p.type_ref))
        .collect::<Vec<_>>()
        .join(", ");
    write!(f, "    {}({parameters}) -> {}", method.name, method.return_type)?;
    if !method.exceptions.is_empty() {
        let exceptions = method
            .exceptions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, " throws {exceptions}")?;
    }
    writeln!(f)
}
