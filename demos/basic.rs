// Example: centering a uniform carousel and clamping it at the end.
use carousel_calc::{CarouselOptions, Orientation, Viewport, uniform};

fn main() {
    let viewport = Viewport::new(1280.0, 720.0);
    let options = CarouselOptions::new(Orientation::Horizontal, 200.0, 16.0).with_inset(64.0);
    let size = 24;

    for focus in [0, 2, 5, 10, 20, 23] {
        println!(
            "focus={focus:>2} center_scroll={:>8.1} boundary_scroll={:>8.1}",
            uniform::center_scroll(&viewport, &options, focus),
            uniform::boundary_scroll(&viewport, &options, focus, size),
        );
    }

    // Missing inputs never fail; they just don't move anything.
    let partial = CarouselOptions::default().with_margin(16.0);
    println!(
        "partial options: center_scroll={}",
        uniform::center_scroll(&viewport, &partial, 10)
    );
}
