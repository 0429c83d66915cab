mod common;

use common::fixtures::*;
use common::svg_assertions::*;
use common::{TestResult, convert_document, convert_document_with, convert_node};
use domsvg::{ConvertConfig, LineBoxPolicy, Point, Rect};

#[test]
fn test_text_is_placed_inside_parent_group() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let rect = Rect::new(0.0, 0.0, 400.0, 40.0);
    let (mut doc, _, div) = single_child_document("div", rect);
    doc.add_text_flow(div, "Hello World", flow_in(rect))?;
    let svg = convert_document(&doc)?;

    let group = by_id(&svg, "div");
    let texts = children_named(&svg, group, "text");
    assert_eq!(texts.len(), 1);
    assert_eq!(svg.text_content(texts[0]), "Hello World");
    Ok(())
}

#[test]
fn test_wrapped_text_yields_one_tspan_per_row() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let rect = Rect::new(20.0, 30.0, 48.0, 32.0);
    let (mut doc, _, p) = single_child_document("p", rect);
    set_styles(&mut doc, p, &[("font-size", "16px"), ("line-height", "20px")])?;
    doc.add_text_flow(p, "Hello World", flow_in(rect))?;
    let svg = convert_document(&doc)?;

    let text = svg.elements_by_name("text")[0];
    let spans = children_named(&svg, text, "tspan");
    let rows: Vec<(String, &str, &str)> = spans
        .iter()
        .map(|span| {
            (
                svg.text_content(*span),
                attr(&svg, *span, "x"),
                attr(&svg, *span, "y"),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Hello".to_string(), "20", "40"),
            ("World".to_string(), "20", "56"),
        ]
    );
    Ok(())
}

#[test]
fn test_text_container_uses_parent_offset_and_style() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let rect = Rect::new(100.0, 200.0, 300.0, 20.0);
    let (mut doc, _, span) = single_child_document("span", rect);
    doc.set_offset(span, Point::new(12.0, 34.0))?;
    set_styles(
        &mut doc,
        span,
        &[
            ("color", "rgb(255, 0, 0)"),
            ("font-family", "serif"),
            ("font-size", "12px"),
            ("font-weight", "700"),
        ],
    )?;
    doc.add_text_flow(span, "Styled", flow_in(rect))?;
    let svg = convert_document(&doc)?;

    let text = svg.elements_by_name("text")[0];
    assert_eq!(attr(&svg, text, "x"), "12");
    assert_eq!(attr(&svg, text, "y"), "34");
    assert_eq!(
        attr(&svg, text, "style"),
        "fill: rgb(255, 0, 0); font-family: serif; font-size: 12px; font-weight: 700;"
    );
    Ok(())
}

#[test]
fn test_explicit_character_boxes_drive_segmentation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut doc, body) = body_document();
    let mut boxes = single_row_boxes("one two three", 0.0, 0.0);
    // "three" sits on the next row.
    for (i, rect) in boxes.iter_mut().enumerate().skip(8) {
        *rect = Rect::new((i - 8) as f32 * 10.0, 20.0, 10.0, 20.0);
    }
    doc.add_text(body, "one two three", boxes)?;
    let svg = convert_document(&doc)?;

    let text = svg.elements_by_name("text")[0];
    let rows: Vec<String> = svg
        .element(text)
        .children()
        .iter()
        .map(|span| svg.text_content(*span))
        .collect();
    assert_eq!(rows, vec!["one two", "three"]);
    Ok(())
}

#[test]
fn test_repeated_spaces_survive_segmentation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut doc, body) = body_document();
    let content = "a  b ";
    doc.add_text(body, content, single_row_boxes(content, 0.0, 0.0))?;
    let svg = convert_document(&doc)?;

    let text = svg.elements_by_name("text")[0];
    assert_eq!(svg.text_content(text), "a  b ");
    Ok(())
}

#[test]
fn test_union_policy_is_applied_from_config() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut doc, body) = body_document();
    let mut boxes = single_row_boxes("hi there", 30.0, 0.0);
    // The second word starts further left on the same row.
    for (i, rect) in boxes.iter_mut().enumerate().skip(3) {
        rect.left = (i - 3) as f32 * 10.0;
    }
    doc.add_text(body, "hi there", boxes)?;

    let first_word = convert_document(&doc)?;
    let union = convert_document_with(
        &doc,
        ConvertConfig {
            line_box_policy: LineBoxPolicy::Union,
            ..ConvertConfig::default()
        },
    )?;

    let span_x = |svg: &domsvg::SvgDocument| {
        let span = svg.elements_by_name("tspan")[0];
        attr(svg, span, "x").to_string()
    };
    assert_eq!(span_x(&first_word), "30");
    assert_eq!(span_x(&union), "0");
    Ok(())
}

#[test]
fn test_text_without_parent_is_skipped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut doc, _) = body_document();
    let orphan = doc.add_detached_text("Lost", single_row_boxes("Lost", 0.0, 0.0))?;
    let svg = convert_node(&doc, orphan)?;

    let root = root(&svg);
    assert_eq!(attr(&svg, root, "width"), "0");
    assert_eq!(attr(&svg, root, "height"), "0");
    assert!(svg.elements_by_name("text").is_empty());
    Ok(())
}

#[test]
fn test_text_of_invisible_parent_is_skipped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
    let (mut doc, _, div) = single_child_document("div", rect);
    doc.set_style(div, "visibility", "hidden")?;
    doc.add_text_flow(div, "Secret", flow_in(rect))?;
    let svg = convert_document(&doc)?;

    assert!(svg.elements_by_name("tspan").is_empty());
    Ok(())
}
