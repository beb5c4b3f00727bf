use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use shared::auth::{AuthError, AuthProvider, AuthUser};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_site_config;
use crate::services::AuthBackend;

#[derive(Clone, Debug, PartialEq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// The signed-in user plus the operations that change it.
#[derive(Clone)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
    backend: Rc<AuthBackend>,
    set_user: Callback<Option<AuthUser>>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user && Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl AuthContext {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_demo(&self) -> bool {
        self.backend.is_demo()
    }

    pub fn sign_in(
        &self,
        email: String,
        password: String,
        on_done: Callback<Result<AuthUser, AuthError>>,
    ) {
        let backend = self.backend.clone();
        let set_user = self.set_user.clone();
        spawn_local(async move {
            let result = backend.sign_in(&email, &password).await;
            match &result {
                Ok(user) => set_user.emit(Some(user.clone())),
                Err(err) => log::warn!("Sign-in failed: {err}"),
            }
            on_done.emit(result);
        });
    }

    pub fn sign_up(&self, form: SignUpForm, on_done: Callback<Result<AuthUser, AuthError>>) {
        let backend = self.backend.clone();
        let set_user = self.set_user.clone();
        spawn_local(async move {
            let result = backend
                .sign_up(&form.email, &form.password, form.name.as_deref())
                .await;
            match &result {
                Ok(user) => set_user.emit(Some(user.clone())),
                Err(err) => log::warn!("Sign-up failed: {err}"),
            }
            on_done.emit(result);
        });
    }

    pub fn sign_out(&self, on_done: Callback<()>) {
        let backend = self.backend.clone();
        let set_user = self.set_user.clone();
        spawn_local(async move {
            if let Err(err) = backend.sign_out().await {
                log::error!("Sign-out did not complete cleanly: {err}");
            }
            set_user.emit(None);
            on_done.emit(());
        });
    }
}

/// Milliseconds until `user` expires, `0` once it has. `None` when the wait
/// does not fit a browser timer.
fn expiry_delay_ms(user: &AuthUser, now: DateTime<Utc>) -> Option<u32> {
    let remaining = (user.expires_at - now).num_milliseconds().max(0);
    u32::try_from(remaining).ok()
}

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Html,
}

#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let config = use_site_config();
    let backend = use_memo(config, |config| AuthBackend::from_config(config));
    let user = {
        let backend = backend.clone();
        use_state(move || backend.current_user())
    };

    let set_user = {
        let user = user.clone();
        Callback::from(move |next: Option<AuthUser>| user.set(next))
    };

    {
        let backend = backend.clone();
        let set_user = set_user.clone();
        use_effect_with((*user).clone(), move |user| {
            let timeout = user
                .as_ref()
                .and_then(|user| expiry_delay_ms(user, Utc::now()))
                .map(|delay| {
                    Timeout::new(delay, move || {
                        // Reloading drops the stored record once it has expired.
                        set_user.emit(backend.current_user());
                    })
                });
            move || drop(timeout)
        });
    }

    let context = AuthContext {
        user: (*user).clone().filter(|user| !user.is_expired(Utc::now())),
        backend,
        set_user,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::BTreeSet;

    fn user_expiring_at(expires_at: DateTime<Utc>) -> AuthUser {
        AuthUser {
            id: "u-1".into(),
            email: "ada@folio.app".into(),
            name: None,
            plan: Default::default(),
            add_ons: BTreeSet::new(),
            expires_at,
            access_token: None,
        }
    }

    #[test]
    fn test_expiry_delay() {
        let now = Utc::now();
        assert_eq!(expiry_delay_ms(&user_expiring_at(now + Duration::seconds(90)), now), Some(90_000));
        assert_eq!(expiry_delay_ms(&user_expiring_at(now - Duration::minutes(1)), now), Some(0));
        assert_eq!(expiry_delay_ms(&user_expiring_at(now + Duration::days(365)), now), None);
    }
}
