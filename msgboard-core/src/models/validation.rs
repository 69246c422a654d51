//! Validation error types

use std::fmt;

/// Validation error for message input and boundary parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author is missing or empty
    EmptyAuthor,

    /// Content is missing or empty
    EmptyContent,

    /// Identifier is not a valid UUID
    InvalidId { value: String },

    /// Page size of zero
    InvalidPageSize,
}

impl ValidationError {
    /// Name of the offending field, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyAuthor => "author",
            Self::EmptyContent => "content",
            Self::InvalidId { .. } => "id",
            Self::InvalidPageSize => "size",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAuthor => f.write_str("usuário não pode estar vazio"),
            Self::EmptyContent => f.write_str("conteúdo da mensagem não pode estar vazio"),
            Self::InvalidId { .. } => f.write_str("ID inválido"),
            Self::InvalidPageSize => f.write_str("tamanho da página deve ser maior que zero"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every validation failure found in a single payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Human-readable messages, one per failure.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::EmptyAuthor.to_string(),
            "usuário não pode estar vazio"
        );
        assert_eq!(
            ValidationError::EmptyContent.to_string(),
            "conteúdo da mensagem não pode estar vazio"
        );
        let err = ValidationError::InvalidId { value: "123".into() };
        assert_eq!(err.to_string(), "ID inválido");
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn collects_in_order() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.push(ValidationError::EmptyAuthor);
        errors.push(ValidationError::EmptyContent);

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.messages(),
            vec![
                "usuário não pode estar vazio".to_string(),
                "conteúdo da mensagem não pode estar vazio".to_string(),
            ]
        );
        assert!(!errors.is_empty());
    }
}
