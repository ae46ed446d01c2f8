use std::collections::BTreeSet;

/// Which side of the split a panel sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Top,
    Bottom,
}

/// Rows a panel can render. The view layer asks `visible_fields` which of
/// them fit at the current height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Location,
    Condition,
    Icon,
    Temperature,
    Details,
    Forecast,
    Attribution,
}

/// Fields the given panel should show at `panel_height`.
///
/// Detail rows appear only while the panel is strictly taller than
/// `detail_threshold`.
pub fn visible_fields(panel: Panel, panel_height: f32, detail_threshold: f32) -> BTreeSet<Field> {
    let detailed = panel_height > detail_threshold;
    let mut fields = BTreeSet::new();

    match panel {
        Panel::Top => {
            fields.insert(Field::Location);
            fields.insert(Field::Temperature);
            if detailed {
                fields.extend([Field::Title, Field::Condition, Field::Icon, Field::Details]);
            }
        }
        Panel::Bottom => {
            fields.insert(Field::Title);
            if detailed {
                fields.extend([Field::Forecast, Field::Attribution]);
            }
        }
    }

    fields
}

/// Font scale for the temperature row: full size when detailed, half when compact
pub fn temperature_scale(panel_height: f32, detail_threshold: f32) -> f32 {
    if panel_height > detail_threshold {
        1.0
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_panel_compact() {
        let fields = visible_fields(Panel::Top, 100.0, 200.0);
        assert_eq!(
            fields.into_iter().collect::<Vec<_>>(),
            vec![Field::Location, Field::Temperature]
        );
    }

    #[test]
    fn test_top_panel_detailed() {
        let fields = visible_fields(Panel::Top, 480.0, 200.0);
        assert_eq!(fields.len(), 6);
        assert!(fields.contains(&Field::Title));
        assert!(fields.contains(&Field::Details));
        assert!(!fields.contains(&Field::Forecast));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!visible_fields(Panel::Top, 200.0, 200.0).contains(&Field::Title));
        assert!(visible_fields(Panel::Top, 200.5, 200.0).contains(&Field::Title));
        assert!(!visible_fields(Panel::Bottom, 200.0, 200.0).contains(&Field::Forecast));
        assert!(visible_fields(Panel::Bottom, 201.0, 200.0).contains(&Field::Forecast));
    }

    #[test]
    fn test_bottom_panel_always_has_title() {
        for height in [0.0, 50.0, 290.0, 670.0] {
            assert!(
                visible_fields(Panel::Bottom, height, 200.0).contains(&Field::Title),
                "missing title at height {}",
                height
            );
        }
    }

    #[test]
    fn test_temperature_scale() {
        assert_eq!(temperature_scale(480.0, 200.0), 1.0);
        assert_eq!(temperature_scale(100.0, 200.0), 0.5);
    }
}
