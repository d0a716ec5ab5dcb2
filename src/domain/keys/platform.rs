//! Target platforms and their fixed key-code tables

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidPlatformError;

use super::task::KeyCode;

/// Named keys accepted by the resolver, in the order shown to users.
pub const NAMED_KEYS: &[&str] = &[
    "SPACE", "ENTER", "ESC", "ESCAPE", "TAB", "UP", "DOWN", "LEFT", "RIGHT", "F1", "F2", "F3",
    "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
];

/// Host platform whose input API receives the key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }

    /// Key code for an uppercase ASCII letter
    pub fn letter_code(&self, ch: char) -> Option<KeyCode> {
        if !ch.is_ascii_uppercase() {
            return None;
        }
        let code = match self {
            Self::Windows => ch as u32,
            Self::Linux => ch.to_ascii_lowercase() as u32,
            Self::MacOs => mac_letter_code(ch)?,
        };
        Some(KeyCode(code))
    }

    /// Key code for an ASCII digit
    pub fn digit_code(&self, ch: char) -> Option<KeyCode> {
        if !ch.is_ascii_digit() {
            return None;
        }
        let code = match self {
            Self::Windows | Self::Linux => ch as u32,
            Self::MacOs => mac_digit_code(ch)?,
        };
        Some(KeyCode(code))
    }

    /// Key code for an uppercased named key (see [`NAMED_KEYS`])
    pub fn named_code(&self, name: &str) -> Option<KeyCode> {
        let code = match self {
            Self::Windows => windows_named_code(name)?,
            Self::MacOs => mac_named_code(name)?,
            Self::Linux => linux_named_code(name)?,
        };
        Some(KeyCode(code))
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = InvalidPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "macos" | "darwin" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => Err(InvalidPlatformError {
                input: s.to_string(),
            }),
        }
    }
}

/// Function key number for `F1`..`F12`
fn function_key_number(name: &str) -> Option<u32> {
    let digits = name.strip_prefix('F')?;
    if digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let n: u32 = digits.parse().ok()?;
    (1..=12).contains(&n).then_some(n)
}

// Windows virtual-key codes
fn windows_named_code(name: &str) -> Option<u32> {
    let code = match name {
        "SPACE" => 0x20,
        "ENTER" => 0x0D,
        "ESC" | "ESCAPE" => 0x1B,
        "TAB" => 0x09,
        "LEFT" => 0x25,
        "UP" => 0x26,
        "RIGHT" => 0x27,
        "DOWN" => 0x28,
        _ => return function_key_number(name).map(|n| 0x70 + n - 1),
    };
    Some(code)
}

// X11 keysyms
fn linux_named_code(name: &str) -> Option<u32> {
    let code = match name {
        "SPACE" => 0x0020,
        "ENTER" => 0xff0d,
        "ESC" | "ESCAPE" => 0xff1b,
        "TAB" => 0xff09,
        "LEFT" => 0xff51,
        "UP" => 0xff52,
        "RIGHT" => 0xff53,
        "DOWN" => 0xff54,
        _ => return function_key_number(name).map(|n| 0xffbe + n - 1),
    };
    Some(code)
}

// macOS CG key codes follow the ANSI keyboard layout, not the alphabet.
fn mac_named_code(name: &str) -> Option<u32> {
    let code = match name {
        "SPACE" => 49,
        "ENTER" => 36,
        "ESC" | "ESCAPE" => 53,
        "TAB" => 48,
        "UP" => 126,
        "DOWN" => 125,
        "LEFT" => 123,
        "RIGHT" => 124,
        "F1" => 122,
        "F2" => 120,
        "F3" => 99,
        "F4" => 118,
        "F5" => 96,
        "F6" => 97,
        "F7" => 98,
        "F8" => 100,
        "F9" => 101,
        "F10" => 109,
        "F11" => 103,
        "F12" => 111,
        _ => return None,
    };
    Some(code)
}

fn mac_letter_code(ch: char) -> Option<u32> {
    let code = match ch {
        'A' => 0,
        'B' => 11,
        'C' => 8,
        'D' => 2,
        'E' => 14,
        'F' => 3,
        'G' => 5,
        'H' => 4,
        'I' => 34,
        'J' => 38,
        'K' => 40,
        'L' => 37,
        'M' => 46,
        'N' => 45,
        'O' => 31,
        'P' => 35,
        'Q' => 12,
        'R' => 15,
        'S' => 1,
        'T' => 17,
        'U' => 32,
        'V' => 9,
        'W' => 13,
        'X' => 7,
        'Y' => 16,
        'Z' => 6,
        _ => return None,
    };
    Some(code)
}

fn mac_digit_code(ch: char) -> Option<u32> {
    let code = match ch {
        '0' => 29,
        '1' => 18,
        '2' => 19,
        '3' => 20,
        '4' => 21,
        '5' => 23,
        '6' => 22,
        '7' => 26,
        '8' => 28,
        '9' => 25,
        _ => return None,
    };
    Some(code)
}
