use freehand_paint::{Canvas, CanvasConfig, InputEvent, PaintError, Point, Tool, ToolSettings};
use egui::Color32;

fn no_text() -> Option<String> {
    None
}

fn is_background(image: &image::RgbImage) -> bool {
    image.pixels().all(|pixel| pixel.0 == [255, 255, 255])
}

#[test]
fn test_pen_stroke_is_transient_until_pointer_up() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    canvas.pointer_down(Point::new(5, 5), &mut no_text);
    canvas.pointer_move(Point::new(10, 10));
    canvas.pointer_move(Point::new(15, 10));

    assert!(canvas.is_drawing());
    assert!(canvas.scene().is_empty());
    assert_eq!(canvas.transient().map(|stroke| stroke.points().len()), Some(3));

    // The live preview shows it, the export does not
    let mut preview = canvas.new_surface().unwrap();
    canvas.render(&mut preview);
    assert_eq!(preview.pixel(Point::new(10, 10)), Some(Color32::BLACK));
    assert!(is_background(&canvas.export_flattened().unwrap()));

    assert!(canvas.pointer_up(Point::new(20, 10)));
    assert!(!canvas.is_drawing());
    assert_eq!(canvas.scene().len(), 1);
    assert_eq!(canvas.scene().strokes()[0].as_vector().unwrap().points().len(), 4);
}

#[test]
fn test_shape_keeps_only_start_and_end() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    canvas.set_tool(Tool::Oval);
    canvas.pointer_down(Point::new(5, 5), &mut no_text);
    for i in 6..30 {
        canvas.pointer_move(Point::new(i, i));
    }
    canvas.pointer_up(Point::new(35, 25));

    let stroke = canvas.scene().strokes()[0].as_vector().cloned().unwrap();
    assert_eq!(stroke.tool(), Tool::Oval);
    assert_eq!(stroke.points(), &[Point::new(5, 5), Point::new(35, 25)]);
}

#[test]
fn test_zero_size_shapes_commit() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    for tool in [Tool::Rect, Tool::Oval, Tool::Line] {
        canvas.set_tool(tool);
        canvas.pointer_down(Point::new(12, 12), &mut no_text);
        assert!(canvas.pointer_up(Point::new(12, 12)));
    }
    assert_eq!(canvas.scene().len(), 3);
    let image = canvas.export_flattened().unwrap();
    assert_eq!(image.get_pixel(30, 30).0, [255, 255, 255]);
}

#[test]
fn test_pointer_up_without_down_commits_nothing() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    canvas.pointer_move(Point::new(3, 3));
    assert!(!canvas.pointer_up(Point::new(4, 4)));
    assert!(canvas.scene().is_empty());
}

#[test]
fn test_text_tool_commits_prompted_text() {
    let mut canvas = Canvas::with_size(80, 40).unwrap();
    canvas.set_tool(Tool::Text);
    let mut asked = 0;
    let mut prompt = || {
        asked += 1;
        Some("Hi".to_owned())
    };

    assert!(canvas.pointer_down(Point::new(5, 25), &mut prompt));
    assert_eq!(asked, 1);
    assert!(!canvas.is_drawing());

    let stroke = canvas.scene().strokes()[0].as_vector().cloned().unwrap();
    assert_eq!(stroke.text_content(), Some("Hi"));
    assert_eq!(stroke.points(), &[Point::new(5, 25)]);
    assert!(!is_background(&canvas.export_flattened().unwrap()));
}

#[test]
fn test_text_tool_cancel_leaves_scene_untouched() {
    let mut canvas = Canvas::with_size(80, 40).unwrap();
    canvas.set_tool(Tool::Text);

    assert!(!canvas.pointer_down(Point::new(5, 5), &mut no_text));
    assert!(canvas.scene().is_empty());
    assert!(!canvas.history().can_undo());
}

#[test]
fn test_blank_text_commits_invisible_stroke() {
    let mut canvas = Canvas::with_size(80, 40).unwrap();
    canvas.set_tool(Tool::Text);

    assert!(canvas.pointer_down(Point::new(5, 25), &mut || Some("   ".to_owned())));
    assert_eq!(canvas.scene().len(), 1);
    assert!(canvas.history().can_undo());
    assert!(is_background(&canvas.export_flattened().unwrap()));
}

#[test]
fn test_eraser_paints_background() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    canvas.set_width(8);
    canvas.pointer_down(Point::new(5, 20), &mut no_text);
    canvas.pointer_up(Point::new(35, 20));

    canvas.set_tool(Tool::Eraser);
    canvas.pointer_down(Point::new(5, 20), &mut no_text);
    canvas.pointer_up(Point::new(35, 20));

    assert_eq!(canvas.scene().len(), 2);
    assert!(is_background(&canvas.export_flattened().unwrap()));
}

#[test]
fn test_input_events_drive_canvas() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    let events = [
        InputEvent::PointerDown(Point::new(1, 1)),
        InputEvent::PointerMove(Point::new(8, 8)),
        InputEvent::PointerUp(Point::new(9, 9)),
    ];
    for event in events {
        canvas.handle_input(event, &mut no_text);
    }
    assert_eq!(canvas.scene().len(), 1);

    assert!(canvas.handle_input(InputEvent::Undo, &mut no_text));
    assert!(canvas.scene().is_empty());
    assert!(canvas.handle_input(InputEvent::Redo, &mut no_text));
    assert_eq!(canvas.scene().len(), 1);
}

#[test]
fn test_settings_apply_to_next_stroke_only() {
    let mut canvas = Canvas::with_size(40, 40).unwrap();
    canvas.set_color(Color32::RED);
    canvas.pointer_down(Point::new(1, 1), &mut no_text);
    canvas.set_color(Color32::BLUE);
    canvas.pointer_up(Point::new(9, 9));

    let stroke = canvas.scene().strokes()[0].as_vector().cloned().unwrap();
    assert_eq!(stroke.color(), Color32::RED);
    assert_eq!(canvas.settings().color, Color32::BLUE);
}

#[test]
fn test_canvas_from_config() {
    let config = CanvasConfig::from_json(
        r#"{ "width": 20, "height": 10, "tools": { "tool": "Line", "width": 8 } }"#,
    )
    .unwrap();
    let canvas = Canvas::new(config).unwrap();

    assert_eq!((canvas.width(), canvas.height()), (20, 10));
    assert_eq!(canvas.background(), Color32::WHITE);
    assert_eq!(
        canvas.settings(),
        &ToolSettings {
            tool: Tool::Line,
            width: 8,
            ..Default::default()
        }
    );
    assert_eq!(canvas.export_flattened().unwrap().dimensions(), (20, 10));
}

#[test]
fn test_zero_sized_canvas_is_rejected() {
    assert!(matches!(
        Canvas::with_size(0, 10),
        Err(PaintError::InvalidCanvasSize { width: 0, height: 10 })
    ));
}
