// Example: a row of mixed-width posters driven by left/right page input.
use carousel_calc::{
    CarouselOptions, Column, Direction, Orientation, Viewport, boundary_scroll_columns,
    next_focus, page_scroll,
};

fn main() {
    let viewport = Viewport::new(1920.0, 1080.0);
    let options = CarouselOptions::new(Orientation::Horizontal, 120.0, 12.0).with_inset(96.0);
    let row: Vec<Column> = [2, 1, 1, 3, 2, 2, 1, 4, 1, 1, 2, 3, 1, 2, 2, 1]
        .into_iter()
        .map(Column::new)
        .collect();

    let mut focus = 0;
    for input in [Direction::Right, Direction::Right, Direction::Right, Direction::Left] {
        let step = next_focus(&row, focus, input);
        focus = match input {
            Direction::Right => (focus + step).min(row.len() - 1),
            Direction::Left => focus.saturating_sub(step),
            Direction::Up | Direction::Down => focus,
        };

        let page = page_scroll(&viewport, &options, &row, focus);
        let centered = boundary_scroll_columns(&viewport, &options, &row, focus);
        println!(
            "{input:?}: step={step} focus={focus:>2} page={:>8.1} ({:?}) centered={:>8.1} ({:?})",
            page.distance, page.position, centered.distance, centered.position,
        );
    }
}
