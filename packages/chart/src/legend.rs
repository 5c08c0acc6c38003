//! Descriptor→visual-key legend assignment.

use noise_chart_chart_models::{LegendEntry, VisualKey};

use crate::config::LegendConfig;

/// Assigns each descriptor, in stack order, a visual key.
///
/// Descriptors take palette colors in order, cycling modulo the palette
/// length, so the mapping is total over any descriptor-set size. The
/// reserved descriptor is overridden to the distinguished pattern after
/// cyclic assignment, regardless of its position.
///
/// The palette is validated non-empty at config load.
#[must_use]
pub fn assign_legend(descriptors: &[String], config: &LegendConfig) -> Vec<LegendEntry> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let key = if *descriptor == config.reserved_descriptor {
                VisualKey::Pattern(config.reserved_pattern.clone())
            } else {
                VisualKey::Color(config.palette[index % config.palette.len()].clone())
            };
            LegendEntry {
                descriptor: descriptor.clone(),
                key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LegendConfig {
        LegendConfig {
            palette: vec![
                "#BA55D3".to_string(),
                "#9370DB".to_string(),
                "#8A2BE2".to_string(),
            ],
            reserved_descriptor: "Loud Music/Party".to_string(),
            reserved_pattern: "crosshatch".to_string(),
        }
    }

    fn descriptors(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn colors_follow_stack_order() {
        let legend = assign_legend(&descriptors(&["Banging", "Loud Talking"]), &config());
        assert_eq!(legend[0].key, VisualKey::Color("#BA55D3".to_string()));
        assert_eq!(legend[1].key, VisualKey::Color("#9370DB".to_string()));
    }

    #[test]
    fn reserved_descriptor_takes_pattern_at_any_position() {
        let legend = assign_legend(
            &descriptors(&["Banging", "Loud Music/Party", "Loud Talking"]),
            &config(),
        );
        assert_eq!(legend[1].descriptor, "Loud Music/Party");
        assert_eq!(legend[1].key, VisualKey::Pattern("crosshatch".to_string()));
        assert_eq!(legend[2].key, VisualKey::Color("#8A2BE2".to_string()));
    }

    #[test]
    fn palette_cycles_past_its_length() {
        let legend = assign_legend(&descriptors(&["A", "B", "C", "D", "E"]), &config());
        assert_eq!(legend[3].key, VisualKey::Color("#BA55D3".to_string()));
        assert_eq!(legend[4].key, VisualKey::Color("#9370DB".to_string()));
    }

    #[test]
    fn assignment_is_deterministic() {
        let names = descriptors(&["Banging", "Loud Music/Party", "Loud Talking"]);
        assert_eq!(
            assign_legend(&names, &config()),
            assign_legend(&names, &config()),
        );
    }

    #[test]
    fn empty_descriptor_set_yields_empty_legend() {
        assert!(assign_legend(&[], &config()).is_empty());
    }
}
