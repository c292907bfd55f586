use std::fmt;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::environment::model::{Comment, NewComment, PostId};
use crate::environment::types::FormField;
use crate::environment::ApiError;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldState {
    pub value: String,
    /// Set by a rejected submit, cleared by the next keystroke
    pub invalid: bool,
}

/// Fields that were empty after trimming. Never reaches the network.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("missing required fields: {}", FieldList(.fields))]
pub struct ValidationError {
    pub fields: Vec<FormField>,
}

struct FieldList<'a>(&'a [FormField]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self.0.iter().map(|field| field.into()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentFormState {
    pub name: FieldState,
    pub email: FieldState,
    pub body: FieldState,
    pub submitting: bool,
    pub submission_error: bool,
}

impl CommentFormState {
    pub fn field(&self, field: FormField) -> &FieldState {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Body => &self.body,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Body => &mut self.body,
        }
    }

    /// A keystroke. Leading whitespace never makes it into a field.
    pub fn update(&mut self, field: FormField, value: &str) {
        let state = self.field_mut(field);
        state.value = value.trim_start().to_string();
        state.invalid = false;
    }

    /// Validates the trimmed fields and, if all are filled, enters the
    /// submitting phase and returns the payload to send.
    pub fn submit(&mut self, post_id: PostId) -> Result<NewComment, ValidationError> {
        self.submission_error = false;
        let mut missing = Vec::new();
        for field in FormField::iter() {
            let state = self.field_mut(field);
            state.invalid = state.value.trim().is_empty();
            if state.invalid {
                missing.push(field);
            }
        }
        if !missing.is_empty() {
            return Err(ValidationError { fields: missing });
        }
        self.submitting = true;
        Ok(NewComment {
            post_id,
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            body: self.body.value.trim().to_string(),
        })
    }

    /// Name and email survive a success
    pub fn finish(&mut self, result: &Result<Comment, ApiError>) {
        self.submitting = false;
        match result {
            Ok(_) => self.body = FieldState::default(),
            Err(_) => self.submission_error = true,
        }
    }

    /// The "Clear" button. Leaves the submission phase alone.
    pub fn reset(&mut self) {
        self.name = FieldState::default();
        self.email = FieldState::default();
        self.body = FieldState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::model::CommentId;

    fn filled() -> CommentFormState {
        let mut form = CommentFormState::default();
        form.update(FormField::Name, "Jane");
        form.update(FormField::Email, "jane@x.com");
        form.update(FormField::Body, "hi");
        form
    }

    fn created(draft: NewComment) -> Comment {
        Comment {
            id: CommentId(1),
            post_id: draft.post_id,
            name: draft.name,
            email: draft.email,
            body: draft.body,
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = filled();
        form.update(FormField::Name, "");
        let error = form.submit(PostId(1)).unwrap_err();
        assert_eq!(error.fields, vec![FormField::Name]);
        assert!(form.name.invalid);
        assert!(!form.email.invalid);
        assert!(!form.submitting);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = CommentFormState::default();
        form.body.value = "   ".to_string();
        let error = form.submit(PostId(1)).unwrap_err();
        assert_eq!(
            error.fields,
            vec![FormField::Name, FormField::Email, FormField::Body]
        );
        assert_eq!(
            error.to_string(),
            "missing required fields: Name, Email, Body"
        );
    }

    #[test]
    fn typing_clears_the_flag() {
        let mut form = CommentFormState::default();
        let _ = form.submit(PostId(1));
        assert!(form.email.invalid);
        form.update(FormField::Email, "  j");
        assert!(!form.email.invalid);
        assert_eq!(form.email.value, "j");
        assert!(form.name.invalid);
    }

    #[test]
    fn submit_trims_values() {
        let mut form = filled();
        form.update(FormField::Body, "hi   ");
        let draft = form.submit(PostId(5)).unwrap();
        assert!(form.submitting);
        assert_eq!(
            draft,
            NewComment {
                post_id: PostId(5),
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                body: "hi".to_string(),
            }
        );
    }

    #[test]
    fn success_clears_only_the_body() {
        let mut form = filled();
        let draft = form.submit(PostId(5)).unwrap();
        form.finish(&Ok(created(draft)));
        assert!(!form.submitting);
        assert_eq!(form.body.value, "");
        assert_eq!(form.name.value, "Jane");
        assert_eq!(form.email.value, "jane@x.com");
    }

    #[test]
    fn failure_keeps_values() {
        let mut form = filled();
        form.submit(PostId(5)).unwrap();
        form.finish(&Err(ApiError::Network {
            call: "create_comment",
            detail: "offline".to_string(),
        }));
        assert!(form.submission_error);
        assert!(!form.submitting);
        assert_eq!(form, {
            let mut expected = filled();
            expected.submission_error = true;
            expected
        });

        // the next attempt starts without the banner
        form.submit(PostId(5)).unwrap();
        assert!(!form.submission_error);
    }

    #[test]
    fn reset_keeps_submission_state() {
        let mut form = filled();
        let _ = form.submit(PostId(1));
        form.update(FormField::Body, "");
        let _ = form.submit(PostId(1));
        form.reset();
        assert_eq!(form.name, FieldState::default());
        assert_eq!(form.body, FieldState::default());
        assert!(form.submitting);
    }
}
