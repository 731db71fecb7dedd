/// Error types for target-matching predicates
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("Invalid glob target '{target}': {reason}")]
    InvalidGlob { target: String, reason: String },

    #[error("Invalid regex target '{target}': {reason}")]
    InvalidRegex { target: String, reason: String },

    #[error("Invalid IP/CIDR target '{target}'")]
    InvalidIpTarget { target: String },
}
