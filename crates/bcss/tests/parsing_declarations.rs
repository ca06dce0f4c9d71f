use bcss::parser::{parse_declaration_block, parse_stylesheet};
use bcss::{DeclarationBlock, Inset, Length};

#[test]
fn test_parse_inline_style() {
    let block = parse_declaration_block(
        "width: 50px; height: 50px; background-color: #333; font-size: calc(50px * 0.5);",
    )
    .unwrap();

    assert_eq!(block.len(), 4);
    assert_eq!(block.get("background-color"), Some("#333"));
    assert_eq!(block.get("font-size"), Some("calc(50px * 0.5)"));
}

#[test]
fn test_parse_last_declaration_without_semicolon() {
    let block =
        parse_declaration_block("top: 20px; left: 50%; transform: translateX(-50%)").unwrap();
    assert_eq!(block.get("transform"), Some("translateX(-50%)"));
}

#[test]
fn test_duplicate_property_keeps_last_value() {
    let block = parse_declaration_block("left: 0; left: auto;").unwrap();
    assert_eq!(block.len(), 1);
    assert_eq!(block.get("left"), Some("auto"));
}

#[test]
fn test_values_with_commas_and_parens() {
    let block = parse_declaration_block("box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);").unwrap();
    assert_eq!(block.get("box-shadow"), Some("0 4px 12px rgba(0, 0, 0, 0.1)"));
}

#[test]
fn test_empty_block() {
    let block = parse_declaration_block("   ").unwrap();
    assert!(block.is_empty());
}

#[test]
fn test_reject_missing_value() {
    assert!(parse_declaration_block("width:").is_err());
    assert!(parse_declaration_block("width 50px").is_err());
}

#[test]
fn test_parse_stylesheet_rules() {
    let sheet = parse_stylesheet(
        r#"
        :host {
            position: fixed;
            z-index: 1000;
        }
        /* popover hidden until the container is active */
        .bubble-container.active .tooltip {
            display: block;
        }
        .tooltip::after {
            content: "";
            transform: rotate(45deg);
        }
        "#,
    )
    .unwrap();

    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet.rules()[0].selector, ":host");
    assert_eq!(
        sheet.rule(".bubble-container.active .tooltip").unwrap().block.get("display"),
        Some("block")
    );
    assert_eq!(
        sheet.rule(".tooltip::after").unwrap().block.get("transform"),
        Some("rotate(45deg)")
    );
}

#[test]
fn test_parse_stylesheet_rejects_trailing_garbage() {
    assert!(parse_stylesheet(".a { color: red; } stray").is_err());
    assert!(parse_stylesheet(".a { color: red;").is_err());
}

#[test]
fn test_rendered_block_parses_back() {
    let mut block = DeclarationBlock::new();
    block.set("bottom", Inset::Beyond(Length::px(15)));
    block.set("left", Inset::Zero);
    block.set("width", Length::from("200px"));

    insta::assert_snapshot!(block.to_css(), @"bottom: calc(100% + 15px); left: 0; width: 200px;");
    assert_eq!(parse_declaration_block(&block.to_css()).unwrap(), block);
}
