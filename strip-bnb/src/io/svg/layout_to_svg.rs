use crate::bnb::skyline::{compute_corners, sort_skyline};
use crate::entities::SPSolution;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws the strip up to the height of the solution, with every placed item.
/// The y-axis points up: the bottom of the strip is drawn at the bottom of the document.
pub fn solution_to_svg(solution: &SPSolution, options: SvgDrawOptions, title: &str) -> Document {
    let width = solution.strip_width;
    //an empty packing still gets a visible strip
    let height = f32::max(solution.height, 0.01 * width);

    let theme = options.theme.theme();
    let margin = 0.05 * f32::max(width, height);
    let vbox = (-margin, -2.0 * margin, width + 2.0 * margin, height + 3.0 * margin);
    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;
    let font_size = 0.5 * margin;

    let label = Text::new(format!(
        "height: {:.3} | width: {:.3} | density: {:.3}% | {}",
        solution.height,
        width,
        solution.density() * 100.0,
        title,
    ))
    .set("x", 0.0_f32)
    .set("y", -0.5 * margin)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let strip_group = Group::new()
        .set("id", "strip")
        .add(
            svg_util::data_to_path(
                svg_util::strip_data(width, height),
                &[
                    ("fill", &*format!("{}", theme.strip_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!("strip, width: {width:.3}, height: {height:.3}"))),
        );

    let items_group = solution.placed_items.iter().enumerate().fold(
        Group::new().set("id", "items"),
        |group, (rank, pi)| {
            //alternate shades, so neighbouring items can be told apart
            let fill = match rank % 2 {
                0 => theme.item_fill,
                _ => svg_util::change_brightness(theme.item_fill, 0.85),
            };
            let mut item_group = Group::new()
                .set("id", format!("item_{}", pi.item_id))
                .add(
                    svg_util::data_to_path(
                        svg_util::rect_data(&pi.rect, height),
                        &[
                            ("fill", &*format!("{fill}")),
                            ("stroke", "black"),
                            ("stroke-width", &*format!("{stroke_width}")),
                        ],
                    )
                    .add(Title::new(format!("#{}, {}", rank + 1, pi))),
                );
            if options.item_labels {
                let (cx, cy) = (
                    pi.rect.x() + 0.5 * pi.rect.width(),
                    height - (pi.rect.y() + 0.5 * pi.rect.height()),
                );
                let size = 0.4 * f32::min(pi.rect.width(), pi.rect.height());
                item_group = item_group.add(
                    Text::new(format!("{}", rank + 1))
                        .set("x", cx)
                        .set("y", cy)
                        .set("font-size", size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central"),
                );
            }
            group.add(item_group)
        },
    );

    let mut document = Document::new()
        .set("viewBox", vbox)
        .add(strip_group)
        .add(items_group)
        .add(label);

    if options.corner_points {
        let mut rects = solution.placed_items.iter().map(|pi| pi.rect).collect_vec();
        sort_skyline(&mut rects);
        let corners = compute_corners(&rects);
        let fill = format!("{}", theme.corner_fill);
        document = document.add(corners.points.into_iter().fold(
            Group::new().set("id", "corners"),
            |group, p| group.add(svg_util::point(p, height, Some(&fill), Some(4.0 * stroke_width))),
        ));
    }

    document
}
