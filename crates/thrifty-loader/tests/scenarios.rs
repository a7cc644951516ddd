//! End-to-end loads of small IDL trees.

use pretty_assertions::assert_eq;
use thrifty_loader::{LoadError, LoadOptions, TreeNode, load_document};
use thrifty_model::{Attribute, Declaration, Document, Method, Service, Struct, TypeRef};

fn load(root: &TreeNode) -> Document {
    load_document("test.thrift", root, LoadOptions::default()).expect("tree should load")
}

/// `enum Color { RED, GREEN, BLUE }`
#[test]
fn enum_values_keep_source_order() {
    let root = TreeNode::document([TreeNode::enum_declaration(
        "Color",
        [
            TreeNode::enum_value("RED"),
            TreeNode::enum_value("GREEN"),
            TreeNode::enum_value("BLUE"),
        ],
    )]);

    let doc = load(&root);
    let color = doc.get("Color").and_then(Declaration::as_enum).unwrap();
    assert_eq!(color.values, ["RED", "GREEN", "BLUE"]);
    assert_eq!(color.comment, None);
}

/// `/** a point */ struct Point { 1: i32 x; 2: i32 y; }`
#[test]
fn commented_struct_gets_comment_and_ordered_fields() {
    let root = TreeNode::document([
        TreeNode::comment_multiline("/** a point */"),
        TreeNode::struct_declaration(
            "Point",
            [TreeNode::field("x", "i32"), TreeNode::field("y", "i32")],
        ),
    ]);

    let doc = load(&root);
    let expected = Struct {
        name: "Point".into(),
        comment: Some("a point".into()),
        attributes: vec![Attribute::new("x", "i32"), Attribute::new("y", "i32")],
    };
    assert_eq!(doc.declarations(), [Declaration::Struct(expected)]);
}

/// `service Calc { i32 add(1: i32 a, 2: i32 b) throws (1: Overflow e); }`
#[test]
fn throws_clause_fills_exceptions_not_parameters() {
    let root = TreeNode::document([TreeNode::service_declaration(
        "Calc",
        [TreeNode::function(
            "add",
            "i32",
            [
                TreeNode::field("a", "i32"),
                TreeNode::field("b", "i32"),
                TreeNode::throws_list([TreeNode::field("e", "Overflow")]),
            ],
        )],
    )]);

    let doc = load(&root);
    let calc = doc.get("Calc").and_then(Declaration::as_service).unwrap();
    let expected = Service {
        name: "Calc".into(),
        comment: None,
        methods: vec![Method {
            name: "add".into(),
            comment: None,
            return_type: TypeRef::new("i32"),
            parameters: vec![Attribute::new("a", "i32"), Attribute::new("b", "i32")],
            exceptions: vec![TypeRef::new("Overflow")],
        }],
    };
    assert_eq!(calc, &expected);
}

#[test]
fn fields_after_throws_list_stay_exceptions_until_function_exits() {
    let root = TreeNode::document([TreeNode::service_declaration(
        "Calc",
        [TreeNode::function(
            "add",
            "i32",
            [
                TreeNode::field("a", "i32"),
                TreeNode::throws_list([TreeNode::field("e", "Overflow")]),
                TreeNode::field("late", "Late"),
            ],
        )],
    )]);

    let doc = load(&root);
    let add = doc
        .get("Calc")
        .and_then(Declaration::as_service)
        .and_then(|calc| calc.method("add"))
        .unwrap();
    assert_eq!(add.parameters, [Attribute::new("a", "i32")]);
    assert_eq!(
        add.exceptions,
        [TypeRef::new("Overflow"), TypeRef::new("Late")]
    );
}

#[test]
fn field_after_function_exits_has_no_acceptor() {
    let root = TreeNode::document([TreeNode::service_declaration(
        "Calc",
        [
            TreeNode::function(
                "add",
                "i32",
                [TreeNode::throws_list([TreeNode::field("e", "Overflow")])],
            ),
            TreeNode::field("stray", "i32"),
        ],
    )]);

    let doc = load(&root);
    let add = doc
        .get("Calc")
        .and_then(Declaration::as_service)
        .and_then(|calc| calc.method("add"))
        .unwrap();
    assert!(add.parameters.is_empty());
    assert_eq!(add.exceptions, [TypeRef::new("Overflow")]);

    let err = load_document("strict.thrift", &root, LoadOptions::strict())
        .expect_err("strict load should reject the stray field");
    assert!(matches!(err, LoadError::OrphanField { name } if name == "stray"));
}

#[test]
fn declarations_keep_source_order_across_kinds() {
    let root = TreeNode::document([
        TreeNode::struct_declaration("B", []),
        TreeNode::enum_declaration("A", []),
        TreeNode::service_declaration("D", []),
        TreeNode::exception_declaration("C", [TreeNode::field("why", "string")]),
        TreeNode::struct_declaration("E", []),
    ]);

    let doc = load(&root);
    let names: Vec<_> = doc.iter().map(Declaration::name).collect();
    assert_eq!(names, ["B", "A", "D", "C", "E"]);

    let failure = doc.get("C").and_then(Declaration::as_exception).unwrap();
    assert_eq!(failure.attributes, [Attribute::new("why", "string")]);
}

#[test]
fn several_methods_each_get_their_own_parameters() {
    let root = TreeNode::document([TreeNode::service_declaration(
        "Store",
        [
            TreeNode::function(
                "get",
                "Item",
                [
                    TreeNode::field("id", "i64"),
                    TreeNode::throws_list([
                        TreeNode::field("nf", "NotFound"),
                        TreeNode::field("de", "Denied"),
                    ]),
                ],
            ),
            TreeNode::function("ping", "void", []),
            TreeNode::function("put", "void", [TreeNode::field("item", "Item")]),
        ],
    )]);

    let doc = load(&root);
    let store = doc.get("Store").and_then(Declaration::as_service).unwrap();
    let names: Vec<_> = store.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["get", "ping", "put"]);

    let get = store.method("get").unwrap();
    assert_eq!(get.parameters, [Attribute::new("id", "i64")]);
    assert_eq!(
        get.exceptions,
        [TypeRef::new("NotFound"), TypeRef::new("Denied")]
    );

    let ping = store.method("ping").unwrap();
    assert_eq!(ping.return_type.as_str(), "void");
    assert!(ping.parameters.is_empty());
    assert!(ping.exceptions.is_empty());

    let put = store.method("put").unwrap();
    assert_eq!(put.parameters, [Attribute::new("item", "Item")]);
    assert!(put.exceptions.is_empty());
}

#[test]
fn wrapper_nodes_are_walked_through() {
    let root = TreeNode::document([
        TreeNode::new("header").with_children([TreeNode::new("include")]),
        TreeNode::new("definition").with_children([TreeNode::struct_declaration(
            "Point",
            [TreeNode::new("field_list").with_children([TreeNode::field("x", "i32")])],
        )]),
    ]);

    let doc = load(&root);
    let point = doc.get("Point").and_then(Declaration::as_struct).unwrap();
    assert_eq!(point.attributes, [Attribute::new("x", "i32")]);
}

#[test]
fn container_types_are_kept_as_written() {
    let root = TreeNode::document([TreeNode::struct_declaration(
        "Bag",
        [
            TreeNode::field("ids", "list<i64>"),
            TreeNode::field("index", "map<string, set<i32>>"),
        ],
    )]);

    let doc = load(&root);
    let bag = doc.get("Bag").and_then(Declaration::as_struct).unwrap();
    let types: Vec<_> = bag.attributes.iter().map(|a| a.type_ref.as_str()).collect();
    assert_eq!(types, ["list<i64>", "map<string, set<i32>>"]);
}

#[test]
fn walking_the_same_tree_twice_gives_equal_documents() {
    let root = TreeNode::document([
        TreeNode::comment_multiline("/** colors */"),
        TreeNode::enum_declaration("Color", [TreeNode::enum_value("RED")]),
        TreeNode::service_declaration(
            "Calc",
            [TreeNode::function(
                "add",
                "i32",
                [
                    TreeNode::field("a", "i32"),
                    TreeNode::throws_list([TreeNode::field("e", "Overflow")]),
                ],
            )],
        ),
    ]);

    assert_eq!(load(&root), load(&root));
}
