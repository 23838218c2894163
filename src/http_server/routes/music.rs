use std::sync::Arc;

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

use crate::catalog::CatalogRef;
use crate::catalog::album::{
    Album, CreateAlbumInput, DeleteAlbumInput, UpdateAlbumInput, create_album_schema,
    delete_album_schema, update_album_schema,
};
use crate::forms::pipeline;
use crate::forms::schema::RawForm;
use crate::http_server::error::Report;
use crate::http_server::state::AppState;

const MUSIC_PATH: &str = "/music";

#[derive(Debug, Serialize)]
pub struct AlbumsPage {
    pub albums: Vec<Album>,
}

/// Add and update screens both need the artist and genre option lists.
#[derive(Debug, Serialize)]
pub struct AlbumFormPage {
    pub artists: Vec<CatalogRef>,
    pub genres: Vec<CatalogRef>,
}

#[derive(Debug, Serialize)]
pub struct AlbumUpdatePage {
    pub album: Album,
    pub artists: Vec<CatalogRef>,
    pub genres: Vec<CatalogRef>,
}

// ---- Loaders ----

pub async fn list_loader(State(state): State<Arc<AppState>>) -> Result<Json<AlbumsPage>, Report> {
    let albums = state.api.list_albums(&state.env).await?;
    Ok(Json(AlbumsPage { albums }))
}

pub async fn add_loader(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AlbumFormPage>, Report> {
    let artists = state.api.list_artists(&state.env).await?;
    let genres = state.api.list_music_genres(&state.env).await?;
    Ok(Json(AlbumFormPage { artists, genres }))
}

pub async fn update_loader(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, Report> {
    let Some(album) = state.api.find_album(&state.env, &id).await? else {
        log::debug!("Album {id} not found, redirecting to list view");
        return Ok(Redirect::to(MUSIC_PATH).into_response());
    };
    let artists = state.api.list_artists(&state.env).await?;
    let genres = state.api.list_music_genres(&state.env).await?;
    Ok(Json(AlbumUpdatePage {
        album,
        artists,
        genres,
    })
    .into_response())
}

// ---- Actions ----

pub async fn create_action(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawForm>,
) -> Response {
    let api = state.api.clone();
    let env = state.env.clone();

    pipeline::submit(&create_album_schema(), &raw, MUSIC_PATH, move |record| async move {
        let input = CreateAlbumInput::from_record(&record)?;
        api.create_album(&env, input).await
    })
    .await
    .into_response()
}

pub async fn update_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(mut raw): Form<RawForm>,
) -> Response {
    raw.entry("id".to_string()).or_insert(id);

    let api = state.api.clone();
    let env = state.env.clone();

    pipeline::submit(&update_album_schema(), &raw, MUSIC_PATH, move |record| async move {
        let input = UpdateAlbumInput::from_record(&record)?;
        api.update_album(&env, input).await
    })
    .await
    .into_response()
}

pub async fn delete_action(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawForm>,
) -> Response {
    let api = state.api.clone();
    let env = state.env.clone();

    pipeline::submit(&delete_album_schema(), &raw, MUSIC_PATH, move |record| async move {
        let input = DeleteAlbumInput::from_record(&record)?;
        api.delete_album(&env, input).await
    })
    .await
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use url::Url;

    use crate::catalog::MutationReceipt;
    use crate::ports::catalog::MockCatalogApi;
    use crate::remote::RemoteEnv;

    fn state_with(mock: MockCatalogApi) -> Arc<AppState> {
        Arc::new(AppState {
            api: Arc::new(mock),
            env: RemoteEnv {
                endpoint: Url::parse("http://localhost:4000/graphql").unwrap(),
                auth: "test-token".into(),
            },
        })
    }

    fn form(entries: &[(&str, &str)]) -> RawForm {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_album_form() -> RawForm {
        form(&[
            ("name", "X"),
            ("artist", "a1"),
            ("genre", "g1"),
            ("recordLabel", "L"),
            ("year", "2020"),
        ])
    }

    #[tokio::test]
    async fn test_create_action_commits_and_redirects_to_music() {
        let mut mock = MockCatalogApi::new();
        mock.expect_create_album()
            .withf(|_, input| {
                input.name == "X"
                    && input.artist == "a1"
                    && input.genre == "g1"
                    && input.record_label == "L"
                    && input.year == 2020
            })
            .times(1)
            .returning(|_, _| Ok(MutationReceipt { id: "alb-1".into() }));

        let response = create_action(State(state_with(mock)), Form(valid_album_form())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/music");
    }

    #[tokio::test]
    async fn test_create_action_with_empty_name_never_calls_remote() {
        let mock = MockCatalogApi::new();

        let mut raw = valid_album_form();
        raw.insert("name".into(), "".into());

        let response = create_action(State(state_with(mock)), Form(raw)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_loader_redirects_when_album_missing() {
        let mut mock = MockCatalogApi::new();
        mock.expect_find_album().returning(|_, _| Ok(None));

        let response = update_loader(State(state_with(mock)), Path("alb-404".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/music");
    }

    #[tokio::test]
    async fn test_delete_action_failure_does_not_redirect() {
        let mut mock = MockCatalogApi::new();
        mock.expect_delete_album()
            .times(1)
            .returning(|_, _| Err(color_eyre::eyre::eyre!("Record to delete does not exist.")));

        let response =
            delete_action(State(state_with(mock)), Form(form(&[("id", "alb-404")]))).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}
