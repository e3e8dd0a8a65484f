/// Integer line rasterization (Bresenham, all eight octants)
use crate::sink::{Color, PixelSink};

/// Visit every pixel of the line from `(x0, y0)` to `(x1, y1)`, both ends
/// included.
///
/// Endpoints are ordered left to right first, so swapping the arguments
/// visits the same set of pixels. The error term uses `A = 2 * dy` and
/// `B = -2 * dx`; halving rounds toward zero, which settles ties on exact
/// diagonals. The error terms are tracked in `i64`, so any pair of `i32`
/// endpoints is accepted.
pub fn for_each_line_pixel<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let ((start_x, start_y), (end_x, end_y)) = if x0 > x1 {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };
    let (start_x, start_y) = (i64::from(start_x), i64::from(start_y));
    let (end_x, end_y) = (i64::from(end_x), i64::from(end_y));

    // x and y never leave the box spanned by the endpoints, so narrowing
    // back to i32 is exact
    let mut plot = |x: i64, y: i64| plot(x as i32, y as i32);

    let mut x = start_x;
    let mut y = start_y;
    let a = 2 * (end_y - start_y);
    let b = -2 * (end_x - start_x);

    if (end_x - start_x).abs() >= (end_y - start_y).abs() {
        if a > 0 {
            // octant 1
            let mut d = a + b / 2;
            while x < end_x {
                plot(x, y);
                if d > 0 {
                    y += 1;
                    d += b;
                }
                x += 1;
                d += a;
            }
        } else {
            // octant 8
            let mut d = a - b / 2;
            while x < end_x {
                plot(x, y);
                if d < 0 {
                    y -= 1;
                    d -= b;
                }
                x += 1;
                d += a;
            }
        }
    } else if a > 0 {
        // octant 2
        let mut d = a / 2 + b;
        while y < end_y {
            plot(x, y);
            if d < 0 {
                x += 1;
                d += a;
            }
            y += 1;
            d += b;
        }
    } else {
        // octant 7
        let mut d = a / 2 - b;
        while y > end_y {
            plot(x, y);
            if d > 0 {
                x += 1;
                d += a;
            }
            y -= 1;
            d -= b;
        }
    }

    plot(end_x, end_y);
}

/// Pixels of a line in the order they are plotted
pub fn line_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut pixels = Vec::new();
    for_each_line_pixel(x0, y0, x1, y1, |x, y| pixels.push((x, y)));
    pixels
}

/// Plot a line into `sink`
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    color: Color,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) {
    for_each_line_pixel(x0, y0, x1, y1, |x, y| sink.plot(x, y, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn pixel_set(x0: i32, y0: i32, x1: i32, y1: i32) -> BTreeSet<(i32, i32)> {
        line_pixels(x0, y0, x1, y1).into_iter().collect()
    }

    #[test]
    fn test_horizontal_line() {
        let expected: Vec<_> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(line_pixels(0, 0, 5, 0), expected);
    }

    #[test]
    fn test_vertical_line() {
        let expected: Vec<_> = (0..=5).map(|y| (0, y)).collect();
        assert_eq!(line_pixels(0, 0, 0, 5), expected);
    }

    #[test]
    fn test_diagonal_line() {
        let expected: Vec<_> = (0..=5).map(|i| (i, i)).collect();
        assert_eq!(line_pixels(0, 0, 5, 5), expected);
    }

    #[test]
    fn test_reversed_shallow_line_matches_forward() {
        assert_eq!(line_pixels(5, 0, 0, 0), line_pixels(0, 0, 5, 0));
        assert_eq!(pixel_set(7, 3, 0, 0), pixel_set(0, 0, 7, 3));
    }

    #[test]
    fn test_reversed_lines_in_every_octant() {
        let targets = [
            (8, 3),
            (3, 8),
            (-3, 8),
            (-8, 3),
            (-8, -3),
            (-3, -8),
            (3, -8),
            (8, -3),
        ];
        for (x, y) in targets {
            assert_eq!(pixel_set(0, 0, x, y), pixel_set(x, y, 0, 0), "({x}, {y})");
        }
    }

    #[test]
    fn test_span_beyond_i32_error_range() {
        // 2 * dy no longer fits in an i32
        let y1 = 1_100_000_000;
        let mut count: u64 = 0;
        let mut first = None;
        let mut last = None;
        for_each_line_pixel(0, 0, 0, y1, |x, y| {
            count += 1;
            first.get_or_insert((x, y));
            last = Some((x, y));
        });

        assert_eq!(count, y1 as u64 + 1);
        assert_eq!(first, Some((0, 0)));
        assert_eq!(last, Some((0, y1)));
    }

    #[test]
    fn test_saturated_endpoints_do_not_overflow() {
        let mut pixels = Vec::new();
        for_each_line_pixel(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN, |x, y| {
            pixels.push((x, y))
        });
        assert_eq!(
            pixels,
            vec![
                (i32::MAX - 2, i32::MIN),
                (i32::MAX - 1, i32::MIN),
                (i32::MAX, i32::MIN)
            ]
        );
    }

    #[test]
    fn test_single_point() {
        assert_eq!(line_pixels(3, 4, 3, 4), vec![(3, 4)]);
    }

    #[test]
    fn test_shallow_ascending_line() {
        assert_eq!(
            line_pixels(0, 0, 4, 2),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_shallow_descending_line() {
        assert_eq!(
            line_pixels(0, 0, 4, -2),
            vec![(0, 0), (1, 0), (2, -1), (3, -1), (4, -2)]
        );
    }

    #[test]
    fn test_steep_descending_line() {
        assert_eq!(
            line_pixels(0, 0, 2, -4),
            vec![(0, 0), (0, -1), (1, -2), (1, -3), (2, -4)]
        );
    }

    #[test]
    fn test_steep_lines_cover_every_row() {
        for (x1, y1) in [(2, 9), (-2, 9), (2, -9), (-2, -9)] {
            let rows: BTreeSet<i32> = line_pixels(0, 0, x1, y1).iter().map(|p| p.1).collect();
            let (lo, hi) = (y1.min(0), y1.max(0));
            assert_eq!(rows, (lo..=hi).collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn test_endpoints_included() {
        for (x1, y1) in [(9, 2), (2, 9), (-9, 2), (2, -9), (-4, -4)] {
            let pixels = line_pixels(1, 1, x1, y1);
            assert!(pixels.contains(&(1, 1)));
            assert!(pixels.contains(&(x1, y1)));
        }
    }

    #[test]
    fn test_draw_line_plots_into_sink() {
        let mut plotted: Vec<(i32, i32)> = Vec::new();
        draw_line(&mut plotted, Color::WHITE, 2, 2, 2, -1);
        assert_eq!(plotted, vec![(2, 2), (2, 1), (2, 0), (2, -1)]);
    }
}
