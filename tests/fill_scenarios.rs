use freehand_paint::{BrushStyle, Canvas, Command, Point, Tool};
use egui::Color32;

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];
const RED: [u8; 3] = [255, 0, 0];

fn no_text() -> Option<String> {
    None
}

/// Canvas holding one black 2px rect outline from (10, 10) to (30, 30)
fn canvas_with_outline() -> Canvas {
    let mut canvas = Canvas::with_size(48, 48).unwrap();
    canvas.set_tool(Tool::Rect);
    canvas.set_width(2);
    canvas.set_color(Color32::BLACK);
    canvas.pointer_down(Point::new(10, 10), &mut no_text);
    canvas.pointer_move(Point::new(25, 25));
    canvas.pointer_up(Point::new(30, 30));
    canvas
}

#[test]
fn test_fill_inside_rect_outline() {
    let mut canvas = canvas_with_outline();
    let before = canvas.export_flattened().unwrap();
    assert_eq!(before.get_pixel(10, 20).0, BLACK);

    assert!(canvas.execute(Command::Fill {
        seed: Point::new(20, 20),
        color: Color32::RED,
    }));
    assert_eq!(canvas.scene().len(), 2);

    let after = canvas.export_flattened().unwrap();
    assert_eq!(after.get_pixel(20, 20).0, RED);
    assert_eq!(after.get_pixel(14, 26).0, RED);
    assert_eq!(after.get_pixel(2, 2).0, WHITE);
    assert_eq!(after.get_pixel(40, 40).0, WHITE);

    for (x, y, pixel) in after.enumerate_pixels() {
        let old = before.get_pixel(x, y).0;
        if old == BLACK {
            assert_eq!(pixel.0, BLACK, "outline pixel ({x}, {y}) changed");
        }
        if pixel.0 == RED {
            assert!(x > 10 && x < 30 && y > 10 && y < 30, "fill leaked to ({x}, {y})");
        }
    }
}

#[test]
fn test_fill_inside_oval_outline() {
    let mut canvas = Canvas::with_size(48, 48).unwrap();
    canvas.set_tool(Tool::Oval);
    canvas.set_width(2);
    canvas.pointer_down(Point::new(8, 8), &mut no_text);
    canvas.pointer_up(Point::new(40, 40));
    let before = canvas.export_flattened().unwrap();

    assert!(canvas.fill(Point::new(24, 24), Color32::RED));

    let after = canvas.export_flattened().unwrap();
    assert_eq!(after.get_pixel(24, 24).0, RED);
    // Inside the bounding box but outside the ellipse
    assert_eq!(after.get_pixel(9, 9).0, WHITE);
    assert_eq!(after.get_pixel(39, 39).0, WHITE);
    assert_eq!(after.get_pixel(2, 2).0, WHITE);
    for (x, y, pixel) in after.enumerate_pixels() {
        if before.get_pixel(x, y).0 == BLACK {
            assert_eq!(pixel.0, BLACK, "outline pixel ({x}, {y}) changed");
        }
        if pixel.0 == RED {
            assert!(x > 8 && x < 40 && y > 8 && y < 40, "fill leaked to ({x}, {y})");
        }
    }
}

#[test]
fn test_fill_with_bucket_tool() {
    let mut canvas = canvas_with_outline();
    canvas.set_tool(Tool::Bucket);
    canvas.set_color(Color32::BLUE);

    assert!(canvas.pointer_down(Point::new(2, 2), &mut no_text));
    assert!(!canvas.is_drawing());
    assert_eq!(canvas.scene().strokes()[1].tool(), Tool::Bucket);

    let image = canvas.export_flattened().unwrap();
    assert_eq!(image.get_pixel(2, 2).0, [0, 0, 255]);
    assert_eq!(image.get_pixel(47, 47).0, [0, 0, 255]);
    assert_eq!(image.get_pixel(20, 20).0, WHITE);
}

#[test]
fn test_fill_with_same_color_commits_nothing() {
    let mut canvas = canvas_with_outline();
    let undo_depth = canvas.history().undo_stack().len();

    assert!(!canvas.fill(Point::new(20, 20), Color32::WHITE));
    assert!(!canvas.fill(Point::new(10, 20), Color32::BLACK));
    assert_eq!(canvas.scene().len(), 1);
    assert_eq!(canvas.history().undo_stack().len(), undo_depth);
}

#[test]
fn test_fill_outside_canvas_is_no_op() {
    let mut canvas = canvas_with_outline();
    assert!(!canvas.fill(Point::new(-1, 5), Color32::RED));
    assert!(!canvas.fill(Point::new(48, 5), Color32::RED));
    assert_eq!(canvas.scene().len(), 1);
}

#[test]
fn test_fill_undo_restores_unfilled_picture() {
    let mut canvas = canvas_with_outline();
    let before = canvas.export_flattened().unwrap();

    canvas.fill(Point::new(20, 20), Color32::RED);
    assert!(canvas.undo());
    assert_eq!(canvas.export_flattened().unwrap(), before);
}

#[test]
fn test_square_brush_draws_nibs_at_segment_ends() {
    let mut canvas = Canvas::with_size(48, 48).unwrap();
    canvas.set_tool(Tool::Pen);
    canvas.set_brush(BrushStyle::Square);
    canvas.set_width(4);
    canvas.pointer_down(Point::new(10, 10), &mut no_text);
    canvas.pointer_move(Point::new(30, 10));
    canvas.pointer_up(Point::new(30, 30));

    let stroke = canvas.scene().strokes()[0].as_vector().cloned().unwrap();
    assert_eq!(stroke.points().len(), 3);

    let image = canvas.export_flattened().unwrap();
    // 4x4 squares anchored half a width up and left of each segment end
    for (cx, cy) in [(30, 10), (30, 30)] {
        for x in cx - 2..cx + 2 {
            for y in cy - 2..cy + 2 {
                assert_eq!(image.get_pixel(x, y).0, BLACK, "nib pixel ({x}, {y})");
            }
        }
    }
    // Both connecting segments
    assert_eq!(image.get_pixel(20, 10).0, BLACK);
    assert_eq!(image.get_pixel(30, 20).0, BLACK);
    // Away from the stroke
    assert_eq!(image.get_pixel(20, 25).0, WHITE);
    assert_eq!(image.get_pixel(45, 45).0, WHITE);
}
