use glam::Vec2;
use pad_core::TouchPoint;
use smallvec::SmallVec;
use web_sys as web;

pub type TouchPoints = SmallVec<[TouchPoint; 4]>;

/// Client (viewport) coordinates -> pad-local coordinates with the origin at
/// the pad center. Corrects for the element offset and for CSS scaling of the
/// canvas backing store.
#[inline]
pub fn client_to_pad_local(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    let css = client - rect_origin;
    let scale = if rect_size.x > 0.0 && rect_size.y > 0.0 {
        backing / rect_size
    } else {
        Vec2::ONE
    };
    css * scale - backing / 2.0
}

fn canvas_frame(canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn mouse_pad_local(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (origin, size, backing) = canvas_frame(canvas);
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    client_to_pad_local(client, origin, size, backing)
}

/// The touches that changed in this event, in pad-local coordinates.
pub fn changed_touches(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> TouchPoints {
    let (origin, size, backing) = canvas_frame(canvas);
    let list = ev.changed_touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint {
            id: t.identifier(),
            pos: client_to_pad_local(
                Vec2::new(t.client_x() as f32, t.client_y() as f32),
                origin,
                size,
                backing,
            ),
        })
        .collect()
}
