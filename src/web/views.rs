//! Request handlers as plain functions.
//!
//! Each view takes the store, the renderer and the already-decoded request
//! values, and returns a [`ViewResponse`]. Nothing here knows about axum, so
//! the views can be exercised directly.

use serde::Deserialize;

use crate::render::{ListContext, Renderer};
use crate::storage::{Database, ListId};

use super::error::WebError;

/// Body of the new-list and add-item forms.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemForm {
    pub item_text: String,
}

/// Outcome of a successful view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewResponse {
    /// A rendered page, sent with 200.
    Html(String),
    /// A redirect to the given path, sent with 302.
    Redirect(String),
}

/// `GET /`
pub fn home_page(renderer: &dyn Renderer) -> Result<ViewResponse, WebError> {
    Ok(ViewResponse::Html(renderer.render_home()?))
}

/// `GET /lists/<id>/`
///
/// `raw_id` is the path segment as received; anything that is not a list id
/// is treated like a missing list.
pub fn view_list(
    db: &Database,
    renderer: &dyn Renderer,
    raw_id: &str,
) -> Result<ViewResponse, WebError> {
    let list_id = parse_list_id(raw_id)?;
    let list = db.get_list(list_id)?;
    let items = db.get_items_for_list(list.id)?;

    let html = renderer.render_list(&ListContext::new(list.id, &items))?;
    Ok(ViewResponse::Html(html))
}

/// `POST /lists/new`
pub fn new_list(db: &Database, form: &ItemForm) -> Result<ViewResponse, WebError> {
    let list_id = db.create_list()?;
    db.create_item(list_id, &form.item_text)?;

    tracing::info!(list_id = %list_id, "Started new list");
    Ok(ViewResponse::Redirect(list_id.url()))
}

/// `POST /lists/<id>/add_item`
pub fn add_item(db: &Database, raw_id: &str, form: &ItemForm) -> Result<ViewResponse, WebError> {
    let list_id = parse_list_id(raw_id)?;
    db.create_item(list_id, &form.item_text)?;

    Ok(ViewResponse::Redirect(list_id.url()))
}

fn parse_list_id(raw_id: &str) -> Result<ListId, WebError> {
    raw_id.parse().map_err(|_| WebError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TeraRenderer;

    fn setup() -> (Database, TeraRenderer) {
        let db = Database::open_in_memory().expect("Failed to open in-memory database");
        let renderer = TeraRenderer::new().expect("Failed to build renderer");
        (db, renderer)
    }

    fn form(text: &str) -> ItemForm {
        ItemForm {
            item_text: text.to_string(),
        }
    }

    fn html(response: ViewResponse) -> String {
        match response {
            ViewResponse::Html(body) => body,
            other => panic!("Expected a page, got {other:?}"),
        }
    }

    #[test]
    fn test_home_page_renders_home_template() {
        let (_db, renderer) = setup();

        let response = home_page(&renderer).unwrap();
        assert_eq!(response, ViewResponse::Html(renderer.render_home().unwrap()));
    }

    #[test]
    fn test_home_page_saves_nothing() {
        let (db, renderer) = setup();

        home_page(&renderer).unwrap();
        assert_eq!(db.item_count().unwrap(), 0);
    }

    #[test]
    fn test_new_list_saves_item_and_redirects() {
        let (db, _renderer) = setup();

        let response = new_list(&db, &form("A new item in the list")).unwrap();

        assert_eq!(db.item_count().unwrap(), 1);
        let list_id = db.recent_lists(1).unwrap()[0].list.id;
        let items = db.get_items_for_list(list_id).unwrap();
        assert_eq!(items[0].text, "A new item in the list");
        assert_eq!(response, ViewResponse::Redirect(format!("/lists/{list_id}/")));
    }

    #[test]
    fn test_new_list_accepts_blank_text() {
        let (db, _renderer) = setup();

        new_list(&db, &form("")).unwrap();
        assert_eq!(db.item_count().unwrap(), 1);
    }

    #[test]
    fn test_view_list_shows_only_its_items() {
        let (db, renderer) = setup();
        let correct = db.create_list().unwrap();
        db.create_item(correct, "itemey 1").unwrap();
        db.create_item(correct, "itemey 2").unwrap();
        let other = db.create_list().unwrap();
        db.create_item(other, "other list item 1").unwrap();
        db.create_item(other, "other list item 2").unwrap();

        let body = html(view_list(&db, &renderer, &correct.to_string()).unwrap());

        assert!(body.contains("itemey 1"));
        assert!(body.contains("itemey 2"));
        assert!(!body.contains("other list item 1"));
        assert!(!body.contains("other list item 2"));
    }

    #[test]
    fn test_view_list_missing_is_not_found() {
        let (db, renderer) = setup();

        let result = view_list(&db, &renderer, "1");
        assert!(matches!(result, Err(WebError::NotFound)));
    }

    #[test]
    fn test_view_list_non_numeric_is_not_found() {
        let (db, renderer) = setup();
        db.create_list().unwrap();

        let result = view_list(&db, &renderer, "abc");
        assert!(matches!(result, Err(WebError::NotFound)));
    }

    #[test]
    fn test_add_item_targets_existing_list() {
        let (db, _renderer) = setup();
        let _other = db.create_list().unwrap();
        let correct = db.create_list().unwrap();

        let response = add_item(&db, &correct.to_string(), &form("A new item for an existing list")).unwrap();

        assert_eq!(response, ViewResponse::Redirect(correct.url()));
        let items = db.get_items_for_list(correct).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "A new item for an existing list");
        assert_eq!(db.item_count().unwrap(), 1);
    }

    #[test]
    fn test_add_item_to_missing_list_is_not_found() {
        let (db, _renderer) = setup();

        let result = add_item(&db, "7", &form("lost"));
        assert!(matches!(result, Err(WebError::NotFound)));
        assert_eq!(db.item_count().unwrap(), 0);
    }
}
