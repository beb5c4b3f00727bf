use yew::prelude::*;

/// Status line for a form: at most one of `error` and `success` is non-empty.
#[derive(Clone, PartialEq)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub submitting: bool,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub start_submit: Callback<()>,
}

impl FormState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let submitting = use_state(|| false);

    let handle_success = {
        let (success, error, submitting) = (success.clone(), error.clone(), submitting.clone());
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            submitting.set(false);
        })
    };

    let handle_error = {
        let (success, error, submitting) = (success.clone(), error.clone(), submitting.clone());
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
            submitting.set(false);
        })
    };

    let start_submit = {
        let (success, error, submitting) = (success.clone(), error.clone(), submitting.clone());
        Callback::from(move |_| {
            error.set(String::new());
            success.set(String::new());
            submitting.set(true);
        })
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        submitting: *submitting,
        handle_success,
        handle_error,
        start_submit,
    }
}
