//! Core data types for the Aurelia Nexus conversation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    /// The person at the keyboard
    #[serde(rename = "usuario")]
    Human,
    /// The synthesized companion
    #[serde(rename = "nexus")]
    Agent,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique key (UUID v4 for live messages)
    pub id: String,
    /// Author of the message
    pub role: Role,
    /// Message text
    pub content: String,
    /// Index into [`VIBES`], resolved modulo its length
    pub vibe_index: usize,
    /// Wall-clock time of creation as `HH:MM`
    pub timestamp: String,
}

impl Message {
    /// Create a message with a fresh random id.
    pub fn new(role: Role, content: impl Into<String>, vibe_index: usize, timestamp: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            vibe_index,
            timestamp: timestamp.into(),
        }
    }

    /// The vibe this message is rendered with.
    pub fn vibe(&self) -> &'static Vibe {
        vibe_for(self.vibe_index)
    }

    pub fn is_human(&self) -> bool {
        self.role == Role::Human
    }
}

/// The conversation the page opens with.
pub fn seed_messages() -> Vec<Message> {
    let seed = |id: &str, role, content: &str, vibe_index, timestamp: &str| Message {
        id: id.to_string(),
        role,
        content: content.to_string(),
        vibe_index,
        timestamp: timestamp.to_string(),
    };

    vec![
        seed(
            "seed-1",
            Role::Agent,
            "Bienvenida al Atrio Neuronal. Las memorias sintéticas orbitan esperando la próxima conexión humana.",
            1,
            "00:01",
        ),
        seed(
            "seed-2",
            Role::Human,
            "Quiero una lluvia de ideas para diseñar una experiencia multisensorial que sorprenda a toda la galaxia.",
            0,
            "00:18",
        ),
        seed(
            "seed-3",
            Role::Agent,
            "Proyectemos: nubes hápticas, sonido binaural modulable y luz líquida que reacciona a la intención humana.",
            2,
            "00:27",
        ),
    ]
}

// ============================================================================
// Vibes
// ============================================================================

/// A cosmetic visual theme. Has no behavioral effect.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Vibe {
    pub label: &'static str,
    pub accent: &'static str,
    pub glow: &'static str,
    pub border: &'static str,
}

impl Vibe {
    /// Accent token as a color, for renderers that cannot use CSS.
    pub fn accent_color(&self) -> Rgba {
        Rgba::parse(self.accent).unwrap_or(Rgba::WHITE)
    }
}

pub const VIBES: [Vibe; 4] = [
    Vibe {
        label: "ÓRBITA EMPÁTICA",
        accent: "rgba(0, 255, 198, 0.7)",
        glow: "0 0 34px rgba(0, 255, 198, 0.55)",
        border: "linear-gradient(120deg, rgba(0, 255, 198, 0.42), rgba(114, 73, 255, 0.28))",
    },
    Vibe {
        label: "VISIÓN SINTÉTICA",
        accent: "rgba(114, 73, 255, 0.75)",
        glow: "0 0 34px rgba(114, 73, 255, 0.55)",
        border: "linear-gradient(120deg, rgba(114, 73, 255, 0.4), rgba(255, 115, 250, 0.3))",
    },
    Vibe {
        label: "PULSO NARRATIVO",
        accent: "rgba(255, 115, 250, 0.75)",
        glow: "0 0 34px rgba(255, 115, 250, 0.45)",
        border: "linear-gradient(120deg, rgba(255, 115, 250, 0.45), rgba(0, 255, 198, 0.3))",
    },
    Vibe {
        label: "TRAZA ANALÍTICA",
        accent: "rgba(88, 154, 255, 0.75)",
        glow: "0 0 34px rgba(88, 154, 255, 0.5)",
        border: "linear-gradient(120deg, rgba(88, 154, 255, 0.42), rgba(135, 211, 255, 0.26))",
    },
];

/// Resolve a vibe index, wrapping around the table.
pub fn vibe_for(index: usize) -> &'static Vibe {
    &VIBES[index % VIBES.len()]
}

/// An RGBA color parsed from a CSS `rgba(...)` / `rgb(...)` token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    /// Parse the first `rgba(r, g, b, a)` or `rgb(r, g, b)` found in `token`.
    pub fn parse(token: &str) -> Option<Rgba> {
        let start = token.find("rgb")?;
        let rest = &token[start..];
        let open = rest.find('(')?;
        let close = rest.find(')')?;
        let parts: Vec<&str> = rest[open + 1..close].split(',').map(str::trim).collect();

        let (r, g, b, a) = match parts.as_slice() {
            [r, g, b] => (r, g, b, "1"),
            [r, g, b, a] => (r, g, b, *a),
            _ => return None,
        };

        Some(Rgba {
            r: r.parse().ok()?,
            g: g.parse().ok()?,
            b: b.parse().ok()?,
            a: a.parse::<f32>().ok()?.clamp(0.0, 1.0),
        })
    }
}

// ============================================================================
// Orbits
// ============================================================================

/// A fixed geometric preset on the orbital ring.
///
/// `angle` and `tilt` are in degrees, distances in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Orbit {
    pub radius: f64,
    pub angle: f64,
    pub elevation: f64,
    pub tilt: f64,
    /// Vertical float amplitude of the idle animation
    pub float: f64,
}

pub const ORBITS: [Orbit; 6] = [
    Orbit { radius: 240.0, angle: -22.0, elevation: -70.0, tilt: -8.0, float: 0.0 },
    Orbit { radius: 320.0, angle: 15.0, elevation: -120.0, tilt: 12.0, float: 12.0 },
    Orbit { radius: 260.0, angle: 42.0, elevation: -20.0, tilt: -16.0, float: -14.0 },
    Orbit { radius: 300.0, angle: -58.0, elevation: 60.0, tilt: 18.0, float: 16.0 },
    Orbit { radius: 210.0, angle: 78.0, elevation: 110.0, tilt: -12.0, float: -8.0 },
    Orbit { radius: 340.0, angle: -102.0, elevation: -140.0, tilt: 22.0, float: 18.0 },
];

/// 3D placement of a message card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Rotation about the Y axis, degrees
    pub rotate_y: f64,
    /// Rotation about the X axis, degrees
    pub rotate_x: f64,
    pub scale: f64,
}

impl Transform {
    /// Render as a CSS transform value.
    pub fn css(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) rotateY({}deg) rotateX({}deg) scale({})",
            self.x, self.y, self.z, self.rotate_y, self.rotate_x, self.scale
        )
    }
}

/// API response wrapper used by the CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new_has_unique_ids() {
        let a = Message::new(Role::Human, "hola", 0, "12:00");
        let b = Message::new(Role::Human, "hola", 0, "12:00");
        assert_ne!(a.id, b.id);
        assert!(a.is_human());
    }

    #[test]
    fn test_role_serde_names() {
        assert_eq!(serde_json::to_string(&Role::Human).unwrap(), "\"usuario\"");
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"nexus\"");
        let role: Role = serde_json::from_str("\"nexus\"").unwrap();
        assert_eq!(role, Role::Agent);
    }

    #[test]
    fn test_seed_messages() {
        let seeds = seed_messages();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].id, "seed-1");
        assert_eq!(seeds[1].role, Role::Human);
        assert_eq!(seeds[2].timestamp, "00:27");
        assert_eq!(seeds[0].vibe().label, "VISIÓN SINTÉTICA");
    }

    #[test]
    fn test_vibe_wraps() {
        assert_eq!(vibe_for(0), &VIBES[0]);
        assert_eq!(vibe_for(5), &VIBES[1]);
    }

    #[test]
    fn test_rgba_parse() {
        let c = Rgba::parse("rgba(0, 255, 198, 0.7)").unwrap();
        assert_eq!((c.r, c.g, c.b), (0, 255, 198));
        assert!((c.a - 0.7).abs() < 1e-6);

        // Glow tokens carry the color after a shadow offset
        let glow = Rgba::parse(VIBES[3].glow).unwrap();
        assert_eq!((glow.r, glow.g, glow.b), (88, 154, 255));

        assert_eq!(Rgba::parse("rgb(1, 2, 3)").unwrap().a, 1.0);
        assert!(Rgba::parse("#ffffff").is_none());
        assert!(Rgba::parse("rgba(1, 2)").is_none());
    }

    #[test]
    fn test_accent_colors_parse() {
        for vibe in VIBES.iter() {
            assert_ne!(vibe.accent_color(), Rgba::WHITE, "{}", vibe.label);
        }
    }

    #[test]
    fn test_transform_css() {
        let t = Transform {
            x: 1.5,
            y: -70.0,
            z: 0.0,
            rotate_y: 13.2,
            rotate_x: -8.0,
            scale: 1.1,
        };
        assert_eq!(
            t.css(),
            "translate3d(1.5px, -70px, 0px) rotateY(13.2deg) rotateX(-8deg) scale(1.1)"
        );
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }
}
