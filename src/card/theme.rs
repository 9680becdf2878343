use std::fmt;

/// The four colors a card is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub author: &'static str,
    pub accent: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#2c3e50",
    author: "#7f8c8d",
    accent: "#3498db",
};

const DARK: Palette = Palette {
    background: "#2c3e50",
    text: "#ecf0f1",
    author: "#95a5a6",
    accent: "#3498db",
};

// points at the <linearGradient> every card defines
const GRADIENT: Palette = Palette {
    background: "url(#gradient)",
    text: "#ffffff",
    author: "#ecf0f1",
    accent: "#ffffff",
};

const OCEAN: Palette = Palette {
    background: "#006994",
    text: "#ffffff",
    author: "#e0f2f7",
    accent: "#4fc3f7",
};

const SUNSET: Palette = Palette {
    background: "#ff6b6b",
    text: "#ffffff",
    author: "#ffe66d",
    accent: "#ffd93d",
};

const FOREST: Palette = Palette {
    background: "#2d6a4f",
    text: "#ffffff",
    author: "#d8f3dc",
    accent: "#95d5b2",
};

const PURPLE: Palette = Palette {
    background: "#6a4c93",
    text: "#ffffff",
    author: "#c9ada7",
    accent: "#d4a5a5",
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Gradient,
    Ocean,
    Sunset,
    Forest,
    Purple,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Light,
        Theme::Dark,
        Theme::Gradient,
        Theme::Ocean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Purple,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Gradient => "gradient",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Purple => "purple",
        }
    }

    /// Exact, case-sensitive lookup of a theme by name.
    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| theme.name() == name)
    }

    /// Resolves a requested theme, falling back to [`Theme::Light`] for anything unknown.
    pub fn resolve(name: Option<&str>) -> Theme {
        name.and_then(Theme::from_name).unwrap_or_default()
    }

    pub const fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
            Theme::Gradient => &GRADIENT,
            Theme::Ocean => &OCEAN,
            Theme::Sunset => &SUNSET,
            Theme::Forest => &FOREST,
            Theme::Purple => &PURPLE,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
