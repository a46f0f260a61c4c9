use std::cmp::Ordering;

use snapped_config::SortOrder;

/// Numeric value of a display price such as `"$1,299.00"` or `"€45"`.
///
/// Everything but digits, `.` and `-` is dropped, then the longest leading
/// number is read, so ranges like `"$12.99 - $15.99"` give the lower bound.
pub fn parse_price(display: &str) -> Option<f64> {
    let cleaned: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in cleaned.char_indices() {
        match c {
            '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            d if d.is_ascii_digit() => seen_digit = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return None;
    }

    cleaned[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Compare two optional prices. Missing prices go last in either order.
pub fn compare_prices(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = a.total_cmp(&b);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
