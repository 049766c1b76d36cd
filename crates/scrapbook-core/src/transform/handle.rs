//! Handle identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

/// One of the eight resize handles on a selected photo's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MiddleTop,
    MiddleBottom,
    MiddleLeft,
    MiddleRight,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
        ResizeHandle::MiddleTop,
        ResizeHandle::MiddleBottom,
        ResizeHandle::MiddleLeft,
        ResizeHandle::MiddleRight,
    ];

    /// Corner handles keep the aspect ratio; edge handles do not.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft
                | ResizeHandle::TopRight
                | ResizeHandle::BottomLeft
                | ResizeHandle::BottomRight
        )
    }

    /// Short name used by the host markup.
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft => "tl",
            ResizeHandle::TopRight => "tr",
            ResizeHandle::BottomLeft => "bl",
            ResizeHandle::BottomRight => "br",
            ResizeHandle::MiddleTop => "mt",
            ResizeHandle::MiddleBottom => "mb",
            ResizeHandle::MiddleLeft => "ml",
            ResizeHandle::MiddleRight => "mr",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeHandle::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| EditorError::UnknownHandle(s.to_string()))
    }
}

/// Any handle a pointer-down can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Resize(ResizeHandle),
    Rotate,
}

impl FromStr for Handle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "rotate" {
            return Ok(Handle::Rotate);
        }
        s.parse().map(Handle::Resize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for handle in ResizeHandle::ALL {
            assert_eq!(handle.as_str().parse::<ResizeHandle>(), Ok(handle));
        }
        assert_eq!("rotate".parse::<Handle>(), Ok(Handle::Rotate));
        assert_eq!(
            "br".parse::<Handle>(),
            Ok(Handle::Resize(ResizeHandle::BottomRight))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "corner".parse::<Handle>(),
            Err(EditorError::UnknownHandle("corner".into()))
        );
        assert!("".parse::<ResizeHandle>().is_err());
        assert!("rotate".parse::<ResizeHandle>().is_err());
    }

    #[test]
    fn test_is_corner() {
        let corners: Vec<_> = ResizeHandle::ALL
            .into_iter()
            .filter(|h| h.is_corner())
            .map(|h| h.to_string())
            .collect();
        assert_eq!(corners, vec!["tl", "tr", "bl", "br"]);
    }
}
