use color_eyre::eyre::Result;

use crate::catalog::album::{Album, CreateAlbumInput, DeleteAlbumInput, UpdateAlbumInput};
use crate::catalog::movie::{CreateMovieInput, DeleteMovieInput, Movie, UpdateMovieInput};
use crate::catalog::{CatalogRef, MutationReceipt};
use crate::remote::RemoteEnv;

/// Port trait wrapping the remote catalog capabilities used by the route
/// handlers.
///
/// The production implementation lives in `catalog::client` (GraphQL over
/// HTTP); tests use the generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    // ---- Albums ----

    async fn create_album(
        &self,
        env: &RemoteEnv,
        input: CreateAlbumInput,
    ) -> Result<MutationReceipt>;

    async fn update_album(
        &self,
        env: &RemoteEnv,
        input: UpdateAlbumInput,
    ) -> Result<MutationReceipt>;

    async fn delete_album(
        &self,
        env: &RemoteEnv,
        input: DeleteAlbumInput,
    ) -> Result<MutationReceipt>;

    async fn find_album(&self, env: &RemoteEnv, id: &str) -> Result<Option<Album>>;

    async fn list_albums(&self, env: &RemoteEnv) -> Result<Vec<Album>>;

    async fn list_artists(&self, env: &RemoteEnv) -> Result<Vec<CatalogRef>>;

    async fn list_music_genres(&self, env: &RemoteEnv) -> Result<Vec<CatalogRef>>;

    // ---- Movies ----

    async fn create_movie(
        &self,
        env: &RemoteEnv,
        input: CreateMovieInput,
    ) -> Result<MutationReceipt>;

    async fn update_movie(
        &self,
        env: &RemoteEnv,
        input: UpdateMovieInput,
    ) -> Result<MutationReceipt>;

    async fn delete_movie(
        &self,
        env: &RemoteEnv,
        input: DeleteMovieInput,
    ) -> Result<MutationReceipt>;

    async fn find_movie(&self, env: &RemoteEnv, id: &str) -> Result<Option<Movie>>;

    async fn list_movies(&self, env: &RemoteEnv) -> Result<Vec<Movie>>;

    async fn list_movie_genres(&self, env: &RemoteEnv) -> Result<Vec<CatalogRef>>;
}
