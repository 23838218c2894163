use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::catalog::album::{
    Album, AlbumCreateData, AlbumUpdateData, CreateAlbumInput, DeleteAlbumInput, UpdateAlbumInput,
};
use crate::catalog::movie::{
    CreateMovieInput, DeleteMovieInput, Movie, MovieCreateData, MovieUpdateData, UpdateMovieInput,
};
use crate::catalog::{CatalogRef, MutationReceipt};
use crate::ports::catalog::CatalogApi;
use crate::remote::input::{WhereId, WhereIdEquals};
use crate::remote::{GraphqlClient, RemoteEnv};

/* ---------- Documents ---------- */

const CREATE_ALBUM: &str = r#"
mutation CreateAlbum($data: AlbumCreateInput!) {
  music {
    createOneAlbum(data: $data) { id }
  }
}"#;

const UPDATE_ALBUM: &str = r#"
mutation UpdateAlbum($where: AlbumWhereUniqueInput!, $data: AlbumUpdateInput!) {
  music {
    updateOneAlbum(where: $where, data: $data) { id }
  }
}"#;

const DELETE_ALBUM: &str = r#"
mutation DeleteAlbum($where: AlbumWhereUniqueInput!) {
  music {
    deleteOneAlbum(where: $where) { id }
  }
}"#;

const FIND_ALBUM: &str = r#"
query AlbumById($where: AlbumWhereInput!) {
  music {
    findFirstAlbum(where: $where) {
      id
      name
      label
      year
      artist { id name }
      genre { id name }
    }
  }
}"#;

const LIST_ALBUMS: &str = r#"
query Albums {
  music {
    findManyAlbum(orderBy: [{ name: asc }]) {
      id
      name
      label
      year
      artist { id name }
      genre { id name }
    }
  }
}"#;

const LIST_ARTISTS: &str = r#"
query Artists {
  music {
    findManyArtist(orderBy: [{ name: asc }]) { id name }
  }
}"#;

const LIST_MUSIC_GENRES: &str = r#"
query MusicGenres {
  music {
    findManyGenre(orderBy: [{ name: asc }]) { id name }
  }
}"#;

const CREATE_MOVIE: &str = r#"
mutation CreateMovie($data: MovieCreateInput!) {
  movies {
    createOneMovie(data: $data) { id }
  }
}"#;

const UPDATE_MOVIE: &str = r#"
mutation UpdateMovie($where: MovieWhereUniqueInput!, $data: MovieUpdateInput!) {
  movies {
    updateOneMovie(where: $where, data: $data) { id }
  }
}"#;

const DELETE_MOVIE: &str = r#"
mutation DeleteMovie($where: MovieWhereUniqueInput!) {
  movies {
    deleteOneMovie(where: $where) { id }
  }
}"#;

const FIND_MOVIE: &str = r#"
query MovieById($where: MovieWhereInput!) {
  movies {
    findFirstMovie(where: $where) {
      id
      title
      director
      year
      synopsis
      cast
      genre { id name }
    }
  }
}"#;

const LIST_MOVIES: &str = r#"
query Movies {
  movies {
    findManyMovie(orderBy: [{ title: asc }]) {
      id
      title
      director
      year
      synopsis
      cast
      genre { id name }
    }
  }
}"#;

const LIST_MOVIE_GENRES: &str = r#"
query MovieGenres {
  movies {
    findManyGenre(orderBy: [{ name: asc }]) { id name }
  }
}"#;

/* ---------- Variable and response envelopes ---------- */

#[derive(Debug, Serialize)]
struct DataVars<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct TargetVars<W> {
    #[serde(rename = "where")]
    target: W,
}

#[derive(Debug, Serialize)]
struct UpdateVars<T> {
    #[serde(rename = "where")]
    target: WhereId,
    data: T,
}

#[derive(Debug, Deserialize)]
struct MusicData<T> {
    music: T,
}

#[derive(Debug, Deserialize)]
struct MoviesData<T> {
    movies: T,
}

#[derive(Debug, Deserialize)]
struct CreatedAlbum {
    #[serde(rename = "createOneAlbum")]
    receipt: MutationReceipt,
}

#[derive(Debug, Deserialize)]
struct UpdatedAlbum {
    #[serde(rename = "updateOneAlbum")]
    receipt: MutationReceipt,
}

#[derive(Debug, Deserialize)]
struct DeletedAlbum {
    #[serde(rename = "deleteOneAlbum")]
    receipt: MutationReceipt,
}

#[derive(Debug, Deserialize)]
struct FirstAlbum {
    #[serde(rename = "findFirstAlbum")]
    album: Option<Album>,
}

#[derive(Debug, Deserialize)]
struct ManyAlbums {
    #[serde(rename = "findManyAlbum")]
    albums: Vec<Album>,
}

#[derive(Debug, Deserialize)]
struct ManyArtists {
    #[serde(rename = "findManyArtist")]
    artists: Vec<CatalogRef>,
}

#[derive(Debug, Deserialize)]
struct ManyGenres {
    #[serde(rename = "findManyGenre")]
    genres: Vec<CatalogRef>,
}

#[derive(Debug, Deserialize)]
struct CreatedMovie {
    #[serde(rename = "createOneMovie")]
    receipt: MutationReceipt,
}

#[derive(Debug, Deserialize)]
struct UpdatedMovie {
    #[serde(rename = "updateOneMovie")]
    receipt: MutationReceipt,
}

#[derive(Debug, Deserialize)]
struct DeletedMovie {
    #[serde(rename = "deleteOneMovie")]
    receipt: MutationReceipt,
}

#[derive(Debug, Deserialize)]
struct FirstMovie {
    #[serde(rename = "findFirstMovie")]
    movie: Option<Movie>,
}

#[derive(Debug, Deserialize)]
struct ManyMovies {
    #[serde(rename = "findManyMovie")]
    movies: Vec<Movie>,
}

/* ---------- Adapter ---------- */

pub struct GraphqlCatalogAdapter {
    transport: GraphqlClient,
}

impl GraphqlCatalogAdapter {
    pub fn new() -> Self {
        Self {
            transport: GraphqlClient::new(),
        }
    }
}

impl Default for GraphqlCatalogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogApi for GraphqlCatalogAdapter {
    async fn create_album(
        &self,
        env: &RemoteEnv,
        input: CreateAlbumInput,
    ) -> Result<MutationReceipt> {
        let data: MusicData<CreatedAlbum> = self
            .transport
            .execute(
                env,
                CREATE_ALBUM,
                DataVars {
                    data: AlbumCreateData::from(&input),
                },
            )
            .await
            .wrap_err("Failed to create album")?;
        Ok(data.music.receipt)
    }

    async fn update_album(
        &self,
        env: &RemoteEnv,
        input: UpdateAlbumInput,
    ) -> Result<MutationReceipt> {
        let data: MusicData<UpdatedAlbum> = self
            .transport
            .execute(
                env,
                UPDATE_ALBUM,
                UpdateVars {
                    target: WhereId::new(&*input.id),
                    data: AlbumUpdateData::from(&input),
                },
            )
            .await
            .wrap_err("Failed to update album")?;
        Ok(data.music.receipt)
    }

    async fn delete_album(
        &self,
        env: &RemoteEnv,
        input: DeleteAlbumInput,
    ) -> Result<MutationReceipt> {
        let data: MusicData<DeletedAlbum> = self
            .transport
            .execute(
                env,
                DELETE_ALBUM,
                TargetVars {
                    target: WhereId::new(input.id),
                },
            )
            .await
            .wrap_err("Failed to delete album")?;
        Ok(data.music.receipt)
    }

    async fn find_album(&self, env: &RemoteEnv, id: &str) -> Result<Option<Album>> {
        let data: MusicData<FirstAlbum> = self
            .transport
            .execute(
                env,
                FIND_ALBUM,
                TargetVars {
                    target: WhereIdEquals::new(id),
                },
            )
            .await
            .wrap_err("Failed to look up album")?;
        Ok(data.music.album)
    }

    async fn list_albums(&self, env: &RemoteEnv) -> Result<Vec<Album>> {
        let data: MusicData<ManyAlbums> = self
            .transport
            .execute(env, LIST_ALBUMS, ())
            .await
            .wrap_err("Failed to list albums")?;
        Ok(data.music.albums)
    }

    async fn list_artists(&self, env: &RemoteEnv) -> Result<Vec<CatalogRef>> {
        let data: MusicData<ManyArtists> = self
            .transport
            .execute(env, LIST_ARTISTS, ())
            .await
            .wrap_err("Failed to list artists")?;
        Ok(data.music.artists)
    }

    async fn list_music_genres(&self, env: &RemoteEnv) -> Result<Vec<CatalogRef>> {
        let data: MusicData<ManyGenres> = self
            .transport
            .execute(env, LIST_MUSIC_GENRES, ())
            .await
            .wrap_err("Failed to list music genres")?;
        Ok(data.music.genres)
    }

    async fn create_movie(
        &self,
        env: &RemoteEnv,
        input: CreateMovieInput,
    ) -> Result<MutationReceipt> {
        let data: MoviesData<CreatedMovie> = self
            .transport
            .execute(
                env,
                CREATE_MOVIE,
                DataVars {
                    data: MovieCreateData::from(&input),
                },
            )
            .await
            .wrap_err("Failed to create movie")?;
        Ok(data.movies.receipt)
    }

    async fn update_movie(
        &self,
        env: &RemoteEnv,
        input: UpdateMovieInput,
    ) -> Result<MutationReceipt> {
        let data: MoviesData<UpdatedMovie> = self
            .transport
            .execute(
                env,
                UPDATE_MOVIE,
                UpdateVars {
                    target: WhereId::new(&*input.id),
                    data: MovieUpdateData::from(&input),
                },
            )
            .await
            .wrap_err("Failed to update movie")?;
        Ok(data.movies.receipt)
    }

    async fn delete_movie(
        &self,
        env: &RemoteEnv,
        input: DeleteMovieInput,
    ) -> Result<MutationReceipt> {
        let data: MoviesData<DeletedMovie> = self
            .transport
            .execute(
                env,
                DELETE_MOVIE,
                TargetVars {
                    target: WhereId::new(input.id),
                },
            )
            .await
            .wrap_err("Failed to delete movie")?;
        Ok(data.movies.receipt)
    }

    async fn find_movie(&self, env: &RemoteEnv, id: &str) -> Result<Option<Movie>> {
        let data: MoviesData<FirstMovie> = self
            .transport
            .execute(
                env,
                FIND_MOVIE,
                TargetVars {
                    target: WhereIdEquals::new(id),
                },
            )
            .await
            .wrap_err("Failed to look up movie")?;
        Ok(data.movies.movie)
    }

    async fn list_movies(&self, env: &RemoteEnv) -> Result<Vec<Movie>> {
        let data: MoviesData<ManyMovies> = self
            .transport
            .execute(env, LIST_MOVIES, ())
            .await
            .wrap_err("Failed to list movies")?;
        Ok(data.movies.movies)
    }

    async fn list_movie_genres(&self, env: &RemoteEnv) -> Result<Vec<CatalogRef>> {
        let data: MoviesData<ManyGenres> = self
            .transport
            .execute(env, LIST_MOVIE_GENRES, ())
            .await
            .wrap_err("Failed to list movie genres")?;
        Ok(data.movies.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_variables_nest_where_and_data() {
        let input = UpdateAlbumInput {
            id: "alb-1".into(),
            name: "X".into(),
            artist: "a1".into(),
            genre: "g1".into(),
            record_label: "L".into(),
            year: 2020,
        };

        let vars = UpdateVars {
            target: WhereId::new(&*input.id),
            data: AlbumUpdateData::from(&input),
        };

        let value = serde_json::to_value(vars).unwrap();
        assert_eq!(value["where"], json!({ "id": "alb-1" }));
        assert_eq!(value["data"]["name"], json!({ "set": "X" }));
    }

    #[test]
    fn test_delete_variables_are_where_only() {
        let vars = TargetVars {
            target: WhereId::new("m9"),
        };
        assert_eq!(
            serde_json::to_value(vars).unwrap(),
            json!({ "where": { "id": "m9" } })
        );
    }

    #[test]
    fn test_lookup_variables_use_equals_filter() {
        let vars = TargetVars {
            target: WhereIdEquals::new("m9"),
        };
        assert_eq!(
            serde_json::to_value(vars).unwrap(),
            json!({ "where": { "id": { "equals": "m9" } } })
        );
    }

    #[test]
    fn test_find_response_decodes_missing_entity() {
        let data: MoviesData<FirstMovie> =
            serde_json::from_value(json!({ "movies": { "findFirstMovie": null } })).unwrap();
        assert!(data.movies.movie.is_none());
    }

    #[test]
    fn test_mutation_response_decodes_receipt() {
        let data: MusicData<CreatedAlbum> = serde_json::from_value(json!({
            "music": { "createOneAlbum": { "id": "alb-42" } }
        }))
        .unwrap();
        assert_eq!(data.music.receipt.id, "alb-42");
    }
}
