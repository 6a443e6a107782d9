//! Navigation and rendering scenarios driven through the public API.

use mandelbrot_viewer::{
    Colour, ColourScheme, Complex, EscapeResult, Navigator, Point, Raster, ViewRect, ZoomEvent,
    ZoomLimits, ZoomState, ZoomStateMachine, decode_view_state, encode_view_state, escape_time,
    pixel_to_complex_coords, render_frame,
};

fn machine(width: u32, height: u32) -> ZoomStateMachine {
    ZoomStateMachine::new(Raster::new(width, height).unwrap(), ZoomLimits::default())
}

#[test]
fn origin_pixel_is_interior_and_black() {
    let raster = Raster::new(4, 4).unwrap();
    let state = ZoomState::default();
    let pixel = Point { x: 2, y: 2 };

    let c = pixel_to_complex_coords(pixel, raster, state.view);
    assert_eq!(c, Complex::ORIGIN);

    let escape = escape_time(c, state.max_iterations);
    assert_eq!(escape.iterations, state.max_iterations);

    let frame = render_frame(
        state.view,
        state.max_iterations,
        ColourScheme::BandedGrayscale,
        raster,
    );
    assert_eq!(frame.pixel(pixel).unwrap(), Colour::BLACK);
}

#[test]
fn far_point_escapes_immediately_for_every_scheme() {
    let escape = escape_time(Complex::new(2.0, 2.0), 150);

    assert_eq!(escape.iterations, 0);
    assert_eq!((escape.real_squared, escape.imag_squared), (4.0, 4.0));

    // smooth count is 5 + 0 + 1 - log2(8) = 3
    assert_eq!(ColourScheme::BandedGrayscale.colour(150, escape), Colour::grey(10));
    assert_eq!(ColourScheme::LinearGrayscale.colour(150, escape), Colour::BLACK);
    assert_eq!(
        ColourScheme::SmoothHsv.colour(150, escape),
        Colour { r: 0, g: 6, b: 51 }
    );
}

#[test]
fn zoom_in_then_out_restores_zoom_level() {
    let machine = machine(800, 600);
    let start = ZoomState::default();
    assert_eq!(start.zoom_level, 4.0);

    let zoomed_in = machine.handle_event(&start, &ZoomEvent::ZoomIn(Point { x: 500, y: 120 }));
    assert_eq!(zoomed_in.zoom_level, 2.0);

    let zoomed_out =
        machine.handle_event(&zoomed_in, &ZoomEvent::ZoomOut(Point { x: 500, y: 120 }));
    assert_eq!(zoomed_out.zoom_level, 4.0);
}

#[test]
fn zoom_in_at_minimum_level_changes_nothing() {
    let machine = machine(800, 400);
    let min_zoom_level = ZoomLimits::default().min_zoom_level;
    let view = ViewRect::centred_on(Complex::new(-0.75, 0.1), min_zoom_level, 2.0).unwrap();
    let state = ZoomState {
        view,
        zoom_level: min_zoom_level,
        focus: Complex::new(-0.75, 0.1),
        max_iterations: 5000,
    };

    let next = machine.handle_event(&state, &ZoomEvent::ZoomIn(Point { x: 400, y: 200 }));

    assert_eq!(next, state);
    assert_eq!(
        machine.transition(&state, &ZoomEvent::ZoomIn(Point { x: 400, y: 200 })),
        None
    );
}

#[test]
fn encoded_state_decodes_to_same_view() {
    let machine = machine(640, 480);
    let mut state = ZoomState::default();
    for pixel in [Point { x: 120, y: 300 }, Point { x: 600, y: 10 }, Point { x: 5, y: 470 }] {
        state = machine.handle_event(&state, &ZoomEvent::ZoomIn(pixel));
    }

    let decoded = decode_view_state(&encode_view_state(&state)).unwrap();

    assert_eq!(decoded.view, state.view);
    let restored = machine.handle_event(&ZoomState::default(), &ZoomEvent::Restore(decoded));
    assert_eq!(restored.view, state.view);
    assert_eq!(restored.zoom_level, state.zoom_level);
}

#[test]
fn missing_field_restores_defaults() {
    let machine = machine(640, 480);

    let state = machine.initial_state(Some("zoom=2&xrange=-1%2C1"));

    assert_eq!(state, ZoomState::default());
}

#[test]
fn navigator_session_round_trips_through_query_string() {
    let raster = Raster::new(320, 240).unwrap();
    let mut navigator = Navigator::new(raster, ColourScheme::SmoothHsv);
    assert!(navigator.handle(ZoomEvent::ZoomIn(Point { x: 80, y: 100 })));
    assert!(navigator.handle(ZoomEvent::ZoomIn(Point { x: 160, y: 120 })));
    let query = format!("?{}", navigator.query_string());

    let mut shared = Navigator::new(raster, ColourScheme::SmoothHsv);
    shared.restore(Some(&query));

    assert_eq!(shared.state().view, navigator.state().view);
    assert!(shared.handle(ZoomEvent::Reset));
    assert_eq!(*shared.state(), ZoomState::default());
}

#[test]
fn escape_result_of_interior_point_reports_budget() {
    let escape: EscapeResult = escape_time(Complex::new(-1.0, 0.0), 64);

    assert!(!escape.escaped(64));
    assert_eq!(escape.iterations, 64);
}
