use shared::auth::AuthUser;
use shared::constants::{INVALID_EMAIL_ERROR, INVALID_NAME_ERROR, INVALID_PASSWORD_ERROR};
use shared::validation::{validate_display_name, validate_email, validate_password};
use shared::{AuthError, PageId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_form_state, use_navigation, SignUpForm};
use crate::styles;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: AuthMode,
    #[prop_or_default]
    pub is_dark: bool,
    pub on_navigate: Callback<PageId>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Client-side checks before anything is sent to a provider. Password
/// strength only matters when a real service will store it.
fn check_fields(
    mode: AuthMode,
    strict_password: bool,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), String> {
    validate_email(email).map_err(|_| INVALID_EMAIL_ERROR.to_string())?;
    if password.is_empty() {
        return Err("Please enter your password".to_string());
    }
    if mode == AuthMode::SignUp {
        if strict_password {
            validate_password(password).map_err(|_| INVALID_PASSWORD_ERROR.to_string())?;
        }
        if !name.trim().is_empty() {
            validate_display_name(name).map_err(|_| INVALID_NAME_ERROR.to_string())?;
        }
    }
    Ok(())
}

#[function_component(Auth)]
pub fn auth(props: &Props) -> Html {
    let auth = use_auth();
    let navigation = use_navigation();
    let form = use_form_state();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let name_ref = use_node_ref();
    let mode = props.mode;

    let onsubmit = {
        let auth = auth.clone();
        let form = form.clone();
        let (email_ref, password_ref, name_ref) = (email_ref.clone(), password_ref.clone(), name_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(auth) = auth.clone() else {
                log::error!("Auth form rendered without an auth provider");
                return;
            };
            let email = input_value(&email_ref);
            let password = input_value(&password_ref);
            let name = input_value(&name_ref);
            if let Err(message) = check_fields(mode, !auth.is_demo(), &email, &password, &name) {
                form.handle_error.emit(message);
                return;
            }

            form.start_submit.emit(());
            let on_done = {
                let form = form.clone();
                let navigation = navigation.clone();
                Callback::from(move |result: Result<AuthUser, AuthError>| match result {
                    Ok(user) => {
                        form.handle_success.emit(format!("Welcome, {}", user.display_name()));
                        navigation.replace(PageId::Dashboard);
                    }
                    Err(err @ AuthError::ConfirmationRequired(_)) => {
                        form.handle_success.emit(err.user_message())
                    }
                    Err(err) => form.handle_error.emit(err.user_message()),
                })
            };
            match mode {
                AuthMode::SignIn => auth.sign_in(email, password, on_done),
                AuthMode::SignUp => {
                    let name = Some(name.trim().to_string()).filter(|n| !n.is_empty());
                    auth.sign_up(SignUpForm { email, password, name }, on_done)
                }
            }
        })
    };

    let go = |page: PageId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    if let Some(user) = auth.as_ref().and_then(|auth| auth.user.as_ref()) {
        return html! {
            <div class={styles::CONTAINER_SM}>
                <div class={classes!(styles::AUTH_CARD, "text-center")}>
                    <h1 class={styles::TEXT_H2}>{ format!("Signed in as {}", user.display_name()) }</h1>
                    <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{ user.email.clone() }</p>
                    <button class={classes!(styles::AUTH_BUTTON, "mt-6")} onclick={go(PageId::Dashboard)}>
                        {"Go to your dashboard"}
                    </button>
                </div>
            </div>
        };
    }

    let is_demo = auth.as_ref().map_or(true, |auth| auth.is_demo());
    let (title, submit_label) = match mode {
        AuthMode::SignIn => ("Welcome back", "Sign in"),
        AuthMode::SignUp => ("Create your account", "Start tracking"),
    };
    let email_class = if form.has_error() { styles::INPUT_ERROR } else { styles::INPUT };

    html! {
        <div class={styles::CONTAINER_SM}>
            <div class={styles::AUTH_CARD}>
                <h1 class={classes!(styles::TEXT_H2, "text-center")}>{ title }</h1>
                if is_demo {
                    <div class={classes!(styles::ALERT_WARNING, "mt-4")}>
                        {"Demo mode: any email and password will do. Nothing leaves this browser."}
                    </div>
                }
                <form class={styles::FORM} {onsubmit} novalidate=true>
                    if mode == AuthMode::SignUp {
                        <div>
                            <label for="name" class={styles::TEXT_LABEL}>{"Name"}</label>
                            <input ref={name_ref} id="name" type="text" autocomplete="name" class={styles::INPUT} placeholder="Optional" />
                        </div>
                    }
                    <div>
                        <label for="email" class={styles::TEXT_LABEL}>{"Email"}</label>
                        <input ref={email_ref} id="email" type="email" autocomplete="email" class={email_class} required=true />
                    </div>
                    <div>
                        <label for="password" class={styles::TEXT_LABEL}>{"Password"}</label>
                        <input ref={password_ref} id="password" type="password"
                            autocomplete={if mode == AuthMode::SignUp { "new-password" } else { "current-password" }}
                            class={styles::INPUT} required=true />
                        if mode == AuthMode::SignUp && !is_demo {
                            <p class={styles::TEXT_HINT}>{ INVALID_PASSWORD_ERROR }</p>
                        }
                    </div>
                    if form.has_error() {
                        <p class={styles::TEXT_ERROR}>{ form.error.clone() }</p>
                    }
                    if !form.success.is_empty() {
                        <p class={styles::TEXT_SUCCESS}>{ form.success.clone() }</p>
                    }
                    <button type="submit" class={styles::AUTH_BUTTON} disabled={form.submitting}>
                        { if form.submitting { "Please wait…" } else { submit_label } }
                    </button>
                </form>
                <p class={classes!(styles::TEXT_SMALL, "mt-6", "text-center")}>
                    { match mode {
                        AuthMode::SignIn => html! {
                            <>
                                {"New to Folio? "}
                                <a href="#" class={styles::LINK} onclick={go_prevent(&props.on_navigate, PageId::SignUp)}>{"Create an account"}</a>
                            </>
                        },
                        AuthMode::SignUp => html! {
                            <>
                                {"Already tracking with us? "}
                                <a href="#" class={styles::LINK} onclick={go_prevent(&props.on_navigate, PageId::SignIn)}>{"Sign in"}</a>
                            </>
                        },
                    } }
                </p>
            </div>
        </div>
    }
}

fn go_prevent(on_navigate: &Callback<PageId>, page: PageId) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(page);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_only_checks_email_and_presence() {
        assert!(check_fields(AuthMode::SignIn, true, "ada@folio.app", "x", "").is_ok());
        assert_eq!(
            check_fields(AuthMode::SignIn, true, "ada", "x", ""),
            Err(INVALID_EMAIL_ERROR.to_string())
        );
        assert!(check_fields(AuthMode::SignIn, false, "ada@folio.app", "", "").is_err());
    }

    #[test]
    fn test_sign_up_password_rules_apply_to_remote_only() {
        assert_eq!(
            check_fields(AuthMode::SignUp, true, "ada@folio.app", "short", ""),
            Err(INVALID_PASSWORD_ERROR.to_string())
        );
        assert!(check_fields(AuthMode::SignUp, false, "ada@folio.app", "short", "").is_ok());
        assert!(check_fields(AuthMode::SignUp, true, "ada@folio.app", "Str0ng!Pass", "Ada").is_ok());
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let name = "x".repeat(100);
        assert_eq!(
            check_fields(AuthMode::SignUp, false, "ada@folio.app", "pw", &name),
            Err(INVALID_NAME_ERROR.to_string())
        );
    }
}
