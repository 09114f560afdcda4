//! Session-to-view-model resolution.
//!
//! Maps a request's session identity onto the view model handed to the
//! renderer: a known visitor renders with their display name, everyone else
//! with an empty one.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{AccountsQuery, PageRenderer};
use crate::domain::{AccountId, Error, Page, ViewModel};

/// Resolves a visitor's identity and renders the requested page.
#[derive(Clone)]
pub struct PageResolver {
    accounts: Arc<dyn AccountsQuery>,
    renderer: Arc<dyn PageRenderer>,
}

impl PageResolver {
    /// Build a resolver over the given ports.
    pub fn new(accounts: Arc<dyn AccountsQuery>, renderer: Arc<dyn PageRenderer>) -> Self {
        Self { accounts, renderer }
    }

    /// Render `page` for the current visitor.
    ///
    /// The `name` entry is always present in the final view model: the
    /// resolved display name when the session identity matches an account,
    /// the empty string otherwise. An identity with no matching account
    /// renders as anonymous rather than failing the request.
    pub async fn render_for_visitor(
        &self,
        visitor: Option<AccountId>,
        page: Page,
        mut model: ViewModel,
    ) -> Result<String, Error> {
        let name = match visitor {
            Some(id) => {
                let found = self.accounts.find_display_name(id).await?;
                if found.is_none() {
                    warn!(account_id = %id, "session identity matches no account; rendering anonymously");
                }
                found.unwrap_or_default()
            }
            None => String::new(),
        };
        model.set_name(name);
        self.renderer.render(page, &model)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::ports::{FixtureAccountsQuery, StoreError};
    use crate::domain::{Account, ErrorCode};
    use async_trait::async_trait;
    use rstest::rstest;

    /// Renderer stub recording the view model it was handed.
    #[derive(Default)]
    struct RecordingRenderer {
        seen: Mutex<Vec<(Page, ViewModel)>>,
    }

    impl RecordingRenderer {
        fn last_model(&self) -> ViewModel {
            self.seen
                .lock()
                .expect("renderer lock")
                .last()
                .expect("at least one render")
                .1
                .clone()
        }
    }

    impl PageRenderer for RecordingRenderer {
        fn render(&self, page: Page, model: &ViewModel) -> Result<String, Error> {
            self.seen
                .lock()
                .expect("renderer lock")
                .push((page, model.clone()));
            Ok(format!("<rendered {page}>"))
        }
    }

    struct FailingAccountsQuery(StoreError);

    #[async_trait]
    impl AccountsQuery for FailingAccountsQuery {
        async fn find_display_name(&self, _id: AccountId) -> Result<Option<String>, StoreError> {
            Err(self.0.clone())
        }
    }

    fn accounts_with_ada() -> Arc<FixtureAccountsQuery> {
        Arc::new(
            FixtureAccountsQuery::default().with_account(Account::new(
                AccountId::new(7),
                "ada@example.com",
                "Ada",
            )),
        )
    }

    #[tokio::test]
    async fn anonymous_visitor_renders_with_empty_name() {
        let renderer = Arc::new(RecordingRenderer::default());
        let resolver = PageResolver::new(accounts_with_ada(), renderer.clone());

        let html = resolver
            .render_for_visitor(None, Page::Home, ViewModel::new())
            .await
            .expect("render succeeds");

        assert_eq!(html, "<rendered index.html>");
        let model = renderer.last_model();
        assert_eq!(model.get("name"), Some(&serde_json::json!("")));
    }

    #[tokio::test]
    async fn known_visitor_renders_with_display_name() {
        let renderer = Arc::new(RecordingRenderer::default());
        let resolver = PageResolver::new(accounts_with_ada(), renderer.clone());

        resolver
            .render_for_visitor(Some(AccountId::new(7)), Page::Home, ViewModel::new())
            .await
            .expect("render succeeds");

        let model = renderer.last_model();
        assert_eq!(model.get("name"), Some(&serde_json::json!("Ada")));
    }

    #[tokio::test]
    async fn unmatched_identity_renders_anonymously() {
        let renderer = Arc::new(RecordingRenderer::default());
        let resolver = PageResolver::new(accounts_with_ada(), renderer.clone());

        resolver
            .render_for_visitor(Some(AccountId::new(42)), Page::Snacks, ViewModel::new())
            .await
            .expect("render succeeds despite missing account");

        let model = renderer.last_model();
        assert_eq!(model.get("name"), Some(&serde_json::json!("")));
    }

    #[tokio::test]
    async fn base_model_entries_survive_resolution() {
        let renderer = Arc::new(RecordingRenderer::default());
        let resolver = PageResolver::new(accounts_with_ada(), renderer.clone());

        let mut model = ViewModel::new();
        model
            .insert("snacks", vec!["Chips", "Nuts"])
            .expect("serialisable value");

        resolver
            .render_for_visitor(None, Page::Snacks, model)
            .await
            .expect("render succeeds");

        let seen = renderer.last_model();
        assert!(seen.contains("snacks"));
        assert!(seen.contains("name"));
    }

    #[rstest]
    #[case(StoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(StoreError::query("bad sql"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn store_failures_surface_as_domain_errors(
        #[case] failure: StoreError,
        #[case] expected: ErrorCode,
    ) {
        let renderer = Arc::new(RecordingRenderer::default());
        let resolver = PageResolver::new(Arc::new(FailingAccountsQuery(failure)), renderer);

        let err = resolver
            .render_for_visitor(Some(AccountId::new(7)), Page::Home, ViewModel::new())
            .await
            .expect_err("store failure must propagate");

        assert_eq!(err.code(), expected);
    }
}
