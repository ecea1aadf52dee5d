use thiserror::Error;

pub type TwResult<T> = Result<T, TwError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwError {
    #[error("Unknown node: {node}")]
    UnknownNode { node: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_message_names_node() {
        let err = TwError::UnknownNode {
            node: "\"CEO\"".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Unknown node"));
        assert!(msg.contains("CEO"));
    }
}
