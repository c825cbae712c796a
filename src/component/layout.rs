//! Derives the wheel order from a concrete pattern.

use super::{ComponentUnit, PickerComponent};

/// Returns the wheels present in `pattern`, ordered by where each unit's
/// symbol first appears.
///
/// Quoted literals (`'h'`) are ignored. Units sharing an offset keep catalog
/// order, so the result is deterministic even for malformed patterns. A
/// pattern without any unit symbol yields no wheels.
pub fn layout(pattern: &str) -> Vec<PickerComponent> {
    let mut first_seen: Vec<(usize, ComponentUnit)> = Vec::new();
    let mut quoted = false;

    for (offset, c) in pattern.char_indices() {
        if c == '\'' {
            quoted = !quoted;
            continue;
        }
        if quoted {
            continue;
        }
        if let Some(unit) = ComponentUnit::ALL.iter().copied().find(|u| u.format_symbol() == c) {
            if !first_seen.iter().any(|(_, seen)| *seen == unit) {
                first_seen.push((offset, unit));
            }
        }
    }

    first_seen.sort_by_key(|(offset, unit)| {
        let catalog_index = ComponentUnit::ALL.iter().position(|u| u == unit).unwrap_or(usize::MAX);
        (*offset, catalog_index)
    });

    first_seen
        .into_iter()
        .enumerate()
        .map(|(position, (_, unit))| PickerComponent { unit, position })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(pattern: &str) -> Vec<ComponentUnit> {
        layout(pattern).into_iter().map(|c| c.unit).collect()
    }

    #[test]
    fn test_day_period_first() {
        let components = layout("a h:mm");
        assert_eq!(
            components,
            vec![
                PickerComponent { unit: ComponentUnit::AmPm, position: 0 },
                PickerComponent { unit: ComponentUnit::Hour12, position: 1 },
                PickerComponent { unit: ComponentUnit::Minute, position: 2 },
            ]
        );
    }

    #[test]
    fn test_twenty_four_hour() {
        assert_eq!(units("HH:mm"), vec![ComponentUnit::Hour24, ComponentUnit::Minute]);
    }

    #[test]
    fn test_us_twelve_hour() {
        assert_eq!(
            units("h:mm a"),
            vec![ComponentUnit::Hour12, ComponentUnit::Minute, ComponentUnit::AmPm]
        );
    }

    #[test]
    fn test_quoted_literals_are_skipped() {
        assert_eq!(units("HH 'h' mm"), vec![ComponentUnit::Hour24, ComponentUnit::Minute]);
    }

    #[test]
    fn test_no_symbols_yields_no_wheels() {
        assert!(layout("").is_empty());
        assert!(layout("yyyy-MM-dd").is_empty());
    }

    #[test]
    fn test_positions_are_contiguous() {
        let components = layout("mm a HH h");
        let positions: Vec<usize> = components.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }
}
