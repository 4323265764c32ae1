//! The fixed F-PHAB 21-joint hand skeleton ordering.
//!
//! F-PHAB orders the joints as: wrist, then the five MCP knuckles
//! (thumb..pinky), then PIP/DIP/TIP triples per finger. Indices are stable
//! across the whole dataset, so they double as array offsets into a parsed
//! frame.
//!
//! Fifteen joints (MCP, PIP and TIP of each finger) drive named scene
//! markers; the wrist drives the armature root directly and the DIP joints
//! are not retargeted.

/// Number of joints in an F-PHAB hand skeleton frame
pub const JOINT_COUNT: usize = 21;

/// A joint in the F-PHAB hand skeleton, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Joint {
    /// Wrist, the skeleton root
    Wrist = 0,
    /// Thumb metacarpophalangeal
    ThumbMcp = 1,
    /// Index metacarpophalangeal
    IndexMcp = 2,
    /// Middle metacarpophalangeal
    MiddleMcp = 3,
    /// Ring metacarpophalangeal
    RingMcp = 4,
    /// Pinky metacarpophalangeal
    PinkyMcp = 5,
    /// Thumb proximal interphalangeal
    ThumbPip = 6,
    /// Thumb distal interphalangeal
    ThumbDip = 7,
    /// Thumb fingertip
    ThumbTip = 8,
    /// Index proximal interphalangeal
    IndexPip = 9,
    /// Index distal interphalangeal
    IndexDip = 10,
    /// Index fingertip
    IndexTip = 11,
    /// Middle proximal interphalangeal
    MiddlePip = 12,
    /// Middle distal interphalangeal
    MiddleDip = 13,
    /// Middle fingertip
    MiddleTip = 14,
    /// Ring proximal interphalangeal
    RingPip = 15,
    /// Ring distal interphalangeal
    RingDip = 16,
    /// Ring fingertip
    RingTip = 17,
    /// Pinky proximal interphalangeal
    PinkyPip = 18,
    /// Pinky distal interphalangeal
    PinkyDip = 19,
    /// Pinky fingertip
    PinkyTip = 20,
}

/// The joints that drive named scene markers, in dataset index order.
///
/// MCP first (as in the dataset layout), then PIP, then TIP per finger.
pub const MARKER_JOINTS: [Joint; 15] = [
    Joint::ThumbMcp,
    Joint::IndexMcp,
    Joint::MiddleMcp,
    Joint::RingMcp,
    Joint::PinkyMcp,
    Joint::ThumbPip,
    Joint::IndexPip,
    Joint::MiddlePip,
    Joint::RingPip,
    Joint::PinkyPip,
    Joint::ThumbTip,
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::RingTip,
    Joint::PinkyTip,
];

impl Joint {
    /// All joints in dataset order
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Wrist,
        Joint::ThumbMcp,
        Joint::IndexMcp,
        Joint::MiddleMcp,
        Joint::RingMcp,
        Joint::PinkyMcp,
        Joint::ThumbPip,
        Joint::ThumbDip,
        Joint::ThumbTip,
        Joint::IndexPip,
        Joint::IndexDip,
        Joint::IndexTip,
        Joint::MiddlePip,
        Joint::MiddleDip,
        Joint::MiddleTip,
        Joint::RingPip,
        Joint::RingDip,
        Joint::RingTip,
        Joint::PinkyPip,
        Joint::PinkyDip,
        Joint::PinkyTip,
    ];

    /// Dataset index of this joint (0-20)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a joint by dataset index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name of the scene marker this joint drives, if any.
    ///
    /// The wrist drives the root object rather than a marker, and the DIP
    /// joints are not retargeted, so both return `None`.
    pub fn marker_name(self) -> Option<&'static str> {
        match self {
            Joint::ThumbMcp => Some("THUMB_MCP"),
            Joint::IndexMcp => Some("INDEX_MCP"),
            Joint::MiddleMcp => Some("MIDDLE_MCP"),
            Joint::RingMcp => Some("RING_MCP"),
            Joint::PinkyMcp => Some("PINKY_MCP"),
            Joint::ThumbPip => Some("THUMB_PIP"),
            Joint::IndexPip => Some("INDEX_PIP"),
            Joint::MiddlePip => Some("MIDDLE_PIP"),
            Joint::RingPip => Some("RING_PIP"),
            Joint::PinkyPip => Some("PINKY_PIP"),
            Joint::ThumbTip => Some("THUMB_TIP"),
            Joint::IndexTip => Some("INDEX_TIP"),
            Joint::MiddleTip => Some("MIDDLE_TIP"),
            Joint::RingTip => Some("RING_TIP"),
            Joint::PinkyTip => Some("PINKY_TIP"),
            _ => None,
        }
    }

    /// Whether this joint drives a scene marker
    pub fn is_marker(self) -> bool {
        self.marker_name().is_some()
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // F-PHAB short names as used in the dataset documentation
        let name = match self {
            Joint::Wrist => "Wrist",
            Joint::ThumbMcp => "TMCP",
            Joint::IndexMcp => "IMCP",
            Joint::MiddleMcp => "MMCP",
            Joint::RingMcp => "RMCP",
            Joint::PinkyMcp => "PMCP",
            Joint::ThumbPip => "TPIP",
            Joint::ThumbDip => "TDIP",
            Joint::ThumbTip => "TTIP",
            Joint::IndexPip => "IPIP",
            Joint::IndexDip => "IDIP",
            Joint::IndexTip => "ITIP",
            Joint::MiddlePip => "MPIP",
            Joint::MiddleDip => "MDIP",
            Joint::MiddleTip => "MTIP",
            Joint::RingPip => "RPIP",
            Joint::RingDip => "RDIP",
            Joint::RingTip => "RTIP",
            Joint::PinkyPip => "PPIP",
            Joint::PinkyDip => "PDIP",
            Joint::PinkyTip => "PTIP",
        };
        f.write_str(name)
    }
}
