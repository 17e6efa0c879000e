//! Startup check for the image formats the generator depends on.
use image::ImageFormat;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Read,
    Write,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Read => write!(f, "reading"),
            Direction::Write => write!(f, "writing"),
        }
    }
}

pub const REQUIRED: &[(ImageFormat, Direction)] = &[
    (ImageFormat::Png, Direction::Read),
    (ImageFormat::Jpeg, Direction::Read),
    (ImageFormat::Png, Direction::Write),
    (ImageFormat::Ico, Direction::Write),
];

#[derive(Debug, thiserror::Error)]
#[error("image support is incomplete, missing: {}", missing_list(.missing))]
pub struct CapabilityError {
    pub missing: Vec<(ImageFormat, Direction)>,
}

fn missing_list(missing: &[(ImageFormat, Direction)]) -> String {
    missing
        .iter()
        .map(|(format, direction)| format!("{} {:?}", direction, format))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_supported(format: ImageFormat, direction: Direction) -> bool {
    match direction {
        Direction::Read => format.reading_enabled(),
        Direction::Write => format.writing_enabled(),
    }
}

pub fn check() -> Result<(), CapabilityError> {
    check_with(REQUIRED, is_supported)
}

fn check_with(
    required: &[(ImageFormat, Direction)],
    is_supported: impl Fn(ImageFormat, Direction) -> bool,
) -> Result<(), CapabilityError> {
    let missing = required
        .iter()
        .copied()
        .filter(|&(format, direction)| !is_supported(format, direction))
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CapabilityError { missing })
    }
}
