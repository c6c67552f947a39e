//! End-to-end tests: export JSON in, converted tree and YAML out.
mod common;
use common::*;
use webform_convert::prelude::*;

#[test]
fn test_export_parses_envelope() {
    let export = FormExport::from_json(SAMPLE_EXPORT).expect("sample export should parse");
    assert_eq!(export.title(), Some("Contact Us"));
    assert_eq!(export.fields().len(), 7);
    assert_eq!(export.fields()[2].kind, FieldKind::Name);
    assert_eq!(export.fields()[6].kind, FieldKind::Textarea);
}

#[test]
fn test_export_decode_failures() {
    match FormExport::from_json("{ not json") {
        Err(DecodeError::Json(_)) => {}
        other => panic!("Expected Json error, got {:?}", other.map(|_| ())),
    }

    match FormExport::from_json("{\"version\": \"2.4\"}") {
        Err(DecodeError::MissingForm) => {}
        other => panic!("Expected MissingForm error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_full_conversion_of_sample_export() {
    let export = FormExport::from_json(SAMPLE_EXPORT).unwrap();
    let conversion = Converter::new().convert(export.fields());

    assert!(conversion.report.is_clean(), "{}", conversion.report);

    let top_keys: Vec<&str> = conversion.elements.keys().collect();
    assert_eq!(top_keys, vec!["page_1", "page_5"]);

    // First page: one section holding the name composite and the email.
    let first_page = conversion.elements.child("page_1").unwrap();
    let section = first_page.child("about_yo_2").unwrap();
    let name = section.child("full_nam_3").unwrap();
    assert_eq!(name.attr("type"), Some(&Value::from("webform_flexbox")));
    assert!(name.child("first_name_3").is_some());
    assert!(name.child("last_name_3").is_some());

    let email = section.child("email_4").unwrap();
    assert_eq!(email.attr("type"), Some(&Value::from("email")));
    assert_eq!(email.attr("required"), Some(&Value::Bool(true)));
    assert_eq!(
        email.attr("placeholder"),
        Some(&Value::from("you@example.com"))
    );

    // Second page: the select and the conditional textarea.
    let second_page = conversion.elements.child("page_5").unwrap();
    assert_eq!(second_page.attr("title"), Some(&Value::from("Page 2")));

    let topic = second_page.child("topic_6").unwrap();
    let options = topic.attr("options").and_then(Value::as_node).unwrap();
    let option_keys: Vec<&str> = options.keys().collect();
    assert_eq!(option_keys, vec!["sales", "support"]);

    let message = second_page.child("message_7").unwrap();
    assert_eq!(
        message.attr("maxlength"),
        Some(&Value::from(serde_json::json!(500)))
    );
    // The rule's string field id "6" resolved against the numeric id 6.
    let visible = message
        .attr("states")
        .and_then(Value::as_node)
        .and_then(|states| states.get("visible"))
        .and_then(Value::as_list)
        .unwrap();
    assert_eq!(visible.len(), 1);
    assert!(
        visible[0]
            .as_node()
            .unwrap()
            .get(":input[name=\"topic_6\"]")
            .is_some()
    );
}

#[test]
fn test_page_leading_export_gets_no_synthetic_page() {
    let export = FormExport::from_json(SAMPLE_EXPORT).unwrap();

    // The sample opens with an explicit page, so no synthetic page is
    // wanted; prepending one anyway would emit an empty extra page and
    // renumber the real ones.
    assert!(!needs_leading_page(export.fields()));

    let converter = Converter::builder()
        .start_with_page(needs_leading_page(export.fields()))
        .build();
    let conversion = converter.convert(export.fields());

    let top_keys: Vec<&str> = conversion.elements.keys().collect();
    assert_eq!(top_keys, vec!["page_1", "page_5"]);

    let first_page = conversion.elements.child("page_1").unwrap();
    assert_eq!(first_page.attr("title"), Some(&Value::from("Page 1")));
    assert!(first_page.child_count() > 0);
}

#[test]
fn test_yaml_rendering_preserves_order() {
    let export = FormExport::from_json(SAMPLE_EXPORT).unwrap();
    let conversion = Converter::new().convert(export.fields());
    let yaml = render_yaml(&conversion.elements).expect("tree should render");

    // Top-level pages appear in first-encounter order, nested keys between.
    let page_1 = yaml.find("page_1").unwrap();
    let section = yaml.find("about_yo_2").unwrap();
    let name = yaml.find("full_nam_3").unwrap();
    let page_5 = yaml.find("page_5").unwrap();
    let message = yaml.find("message_7").unwrap();
    assert!(page_1 < section && section < name && name < page_5 && page_5 < message);

    assert!(yaml.contains("wizard_page"));
    assert!(yaml.contains("topic_6"));
    assert!(!yaml.contains("not found"));
}

#[test]
fn test_yaml_rendering_of_attributes() {
    let conversion = Converter::new().convert(&[required_text(1, "Your name")]);
    let yaml = render_yaml(&conversion.elements).expect("tree should render");

    assert!(yaml.contains("your_nam_1"));
    assert!(yaml.contains("#title"));
    assert!(yaml.contains("Your name"));
    assert!(yaml.contains("textfield"));
    assert!(yaml.contains("#required"));
    assert!(yaml.contains("true"));
}
