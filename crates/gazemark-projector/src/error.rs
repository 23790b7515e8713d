use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ProjectError {
    DegenerateFov { axis: &'static str },
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::DegenerateFov { axis } => {
                write!(f, "degenerate field of view: zero {axis} tangent span")
            }
        }
    }
}

impl std::error::Error for ProjectError {}
