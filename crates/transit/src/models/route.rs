//! Route classification for display.
//!
//! The raw dataset only carries a free-form route name. The category is
//! derived from it by case-sensitive substring matching.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    Local,
    Limited,
    Express,
    SouthCounty,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 4] = [
        RouteCategory::Local,
        RouteCategory::Limited,
        RouteCategory::Express,
        RouteCategory::SouthCounty,
    ];

    /// Classify a route name. "Express" wins over "Limited", which wins over
    /// "South County"; everything else is local service.
    pub fn classify(route_name: &str) -> Self {
        if route_name.contains("Express") {
            Self::Express
        } else if route_name.contains("Limited") {
            Self::Limited
        } else if route_name.contains("South County") {
            Self::SouthCounty
        } else {
            Self::Local
        }
    }

    /// Display color (hex RGB)
    pub fn color(self) -> &'static str {
        match self {
            Self::Express => "#ce202f",
            Self::Limited => "#10A37F",
            Self::SouthCounty => "#F5A623",
            Self::Local => "#6B7280",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Limited => "Limited",
            Self::SouthCounty => "South County",
            Self::Local => "Local",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Limited => "limited",
            Self::SouthCounty => "south-county",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn route_color(route_name: &str) -> &'static str {
    RouteCategory::classify(route_name).color()
}

pub fn route_label(route_name: &str) -> &'static str {
    RouteCategory::classify(route_name).label()
}
