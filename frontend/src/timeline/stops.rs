use crate::config;

/// One labeled position on the panorama, `position` is a percentage offset
/// into the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub label: &'static str,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Narrow,
    Wide,
}

impl Regime {
    pub fn from_viewport_width(width: f64) -> Self {
        if width >= config::WIDE_VIEWPORT_MIN_WIDTH {
            Regime::Wide
        } else {
            Regime::Narrow
        }
    }

    pub fn config(self) -> &'static RegimeConfig {
        match self {
            Regime::Narrow => &NARROW,
            Regime::Wide => &WIDE,
        }
    }
}

/// Everything that changes between the narrow and wide layouts.
#[derive(Debug, PartialEq)]
pub struct RegimeConfig {
    pub regime: Regime,
    pub stops: &'static [Stop],
    pub scale_factor: f64,
    pub image_width_percent: f64,
    pub accepts_pointer: bool,
}

// Both layouts walk the same panorama, so an index survives a resize.
static STOPS: [Stop; 8] = [
    Stop { label: "History of Money", position: 0.0 },
    Stop { label: "10,000 BCE - Barter Systems", position: 14.0 },
    Stop { label: "3,000 BCE - Precious Metals", position: 28.0 },
    Stop { label: "600 BCE - Coinage", position: 42.0 },
    Stop { label: "1000 CE - Paper Money", position: 56.0 },
    Stop { label: "1944 - Gold Standard", position: 70.0 },
    Stop { label: "1971 - Fiat Currency", position: 84.0 },
    Stop { label: "2009 - Cryptocurrency", position: 98.0 },
];

pub static WIDE: RegimeConfig = RegimeConfig {
    regime: Regime::Wide,
    stops: &STOPS,
    scale_factor: 0.85,
    image_width_percent: 280.0,
    accepts_pointer: true,
};

pub static NARROW: RegimeConfig = RegimeConfig {
    regime: Regime::Narrow,
    stops: &STOPS,
    scale_factor: 0.75,
    image_width_percent: 220.0,
    accepts_pointer: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_selects_regime() {
        assert_eq!(Regime::from_viewport_width(375.0), Regime::Narrow);
        assert_eq!(Regime::from_viewport_width(1023.9), Regime::Narrow);
        assert_eq!(Regime::from_viewport_width(1024.0), Regime::Wide);
        assert_eq!(Regime::from_viewport_width(1920.0), Regime::Wide);
    }

    #[test]
    fn stop_tables_are_ordered_and_inside_the_image() {
        for config in [&WIDE, &NARROW] {
            assert!(!config.stops.is_empty());
            for pair in config.stops.windows(2) {
                assert!(pair[0].position < pair[1].position);
            }
            for stop in config.stops {
                assert!((0.0..=100.0).contains(&stop.position));
            }
        }
    }

    #[test]
    fn regime_config_round_trips() {
        assert_eq!(Regime::Wide.config().regime, Regime::Wide);
        assert_eq!(Regime::Narrow.config().regime, Regime::Narrow);
        assert!(!Regime::Narrow.config().accepts_pointer);
    }

    #[test]
    fn layouts_share_one_stop_sequence() {
        assert_eq!(WIDE.stops, NARROW.stops);
        assert_eq!(WIDE.stops.len(), 8);
        assert_eq!(NARROW.stops[3].label, "600 BCE - Coinage");
    }
}
