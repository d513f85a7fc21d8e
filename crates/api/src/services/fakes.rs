//! In-memory store fakes and fixture builders for service unit tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dsmovie_core::pagination::{Page, PageRequest};
use dsmovie_core::roles::{ROLE_ADMIN, ROLE_CLIENT};
use dsmovie_core::score::mean_score;
use dsmovie_core::types::DbId;
use dsmovie_db::models::movie::{Movie, MovieInput};
use dsmovie_db::models::score::Score;
use dsmovie_db::models::user::{User, UserDetailsProjection};
use dsmovie_db::store::{MovieStore, ScoreStore, StoreError, StoreResult, UserStore};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const FANTASY_GENRE_ID: DbId = 1;

pub fn movie_entity(id: DbId) -> Movie {
    Movie {
        id,
        title: "Test Movie".to_string(),
        score: 0.0,
        count: 0,
        image: "https://www.themoviedb.org/t/p/w533_and_h300_bestv2/jBJWaqoSCiARWtfV0GlqHrcdidd.jpg"
            .to_string(),
        genre_id: FANTASY_GENRE_ID,
        genre_name: "Fantasy".to_string(),
    }
}

pub fn movie_input() -> MovieInput {
    MovieInput {
        title: "Test Movie Updated".to_string(),
        score: 4.5,
        count: 2,
        image: "https://img.example.com/updated.jpg".to_string(),
        genre_id: FANTASY_GENRE_ID,
    }
}

pub fn user_entity(id: DbId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

/// Projection rows for a user holding both the client and admin roles.
pub fn admin_client_rows(username: &str) -> Vec<UserDetailsProjection> {
    [(1, ROLE_CLIENT), (2, ROLE_ADMIN)]
        .into_iter()
        .map(|(role_id, authority)| UserDetailsProjection {
            username: username.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            role_id,
            authority: authority.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// FakeMovieStore
// ---------------------------------------------------------------------------

/// Movie store kept in a map, with call counters and a set of ids whose
/// deletion is refused as an integrity violation.
pub struct FakeMovieStore {
    movies: Mutex<BTreeMap<DbId, Movie>>,
    genres: HashMap<DbId, String>,
    dependent: Mutex<Vec<DbId>>,
    next_id: AtomicI64,
    find_calls: AtomicUsize,
    search_calls: AtomicUsize,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl FakeMovieStore {
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let next_id = movies.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            movies: Mutex::new(movies.into_iter().map(|m| (m.id, m)).collect()),
            genres: HashMap::from([(FANTASY_GENRE_ID, "Fantasy".to_string())]),
            dependent: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(next_id),
            find_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Make `id` exist but refuse deletion, as if other rows referenced it.
    pub fn add_dependent(&self, movie: Movie) {
        self.dependent.lock().unwrap().push(movie.id);
        self.movies.lock().unwrap().insert(movie.id, movie);
    }

    pub fn get(&self, id: DbId) -> Option<Movie> {
        self.movies.lock().unwrap().get(&id).cloned()
    }

    pub fn finds(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn genre_name(&self, genre_id: DbId) -> StoreResult<String> {
        self.genres
            .get(&genre_id)
            .cloned()
            .ok_or_else(|| StoreError::IntegrityViolation("tb_movie_genre_id_fkey".into()))
    }
}

#[async_trait]
impl MovieStore for FakeMovieStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }

    async fn search_by_title(&self, fragment: &str, page: PageRequest) -> StoreResult<Page<Movie>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let needle = fragment.to_lowercase();
        let matches: Vec<Movie> = self
            .movies
            .lock()
            .unwrap()
            .values()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let total = matches.len() as i64;
        let content = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect();
        Ok(Page::new(content, page, total))
    }

    async fn insert(&self, input: &MovieInput) -> StoreResult<Movie> {
        let genre_name = self.genre_name(input.genre_id)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let movie = Movie {
            id,
            title: input.title.clone(),
            score: input.score,
            count: input.count,
            image: input.image.clone(),
            genre_id: input.genre_id,
            genre_name,
        };
        self.movies.lock().unwrap().insert(id, movie.clone());
        Ok(movie)
    }

    async fn get_reference(&self, id: DbId) -> StoreResult<Movie> {
        self.get(id).ok_or(StoreError::ReferenceNotFound(id))
    }

    async fn save(&self, movie: &Movie) -> StoreResult<Movie> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let genre_name = self.genre_name(movie.genre_id)?;
        let mut movies = self.movies.lock().unwrap();
        let slot = movies
            .get_mut(&movie.id)
            .ok_or(StoreError::ReferenceNotFound(movie.id))?;
        *slot = Movie {
            genre_name,
            ..movie.clone()
        };
        Ok(slot.clone())
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.movies.lock().unwrap().contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.dependent.lock().unwrap().contains(&id) {
            return Err(StoreError::IntegrityViolation("tb_score_movie_id_fkey".into()));
        }
        self.movies
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::ReferenceNotFound(id))
    }
}

// ---------------------------------------------------------------------------
// FakeUserStore
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeUserStore {
    pub users: Vec<User>,
    pub rows: Vec<UserDetailsProjection>,
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn search_user_and_roles_by_username(
        &self,
        username: &str,
    ) -> StoreResult<Vec<UserDetailsProjection>> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.username == username)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// FakeScoreStore
// ---------------------------------------------------------------------------

/// Score store that refreshes the aggregates of movies held in a
/// [`FakeMovieStore`].
pub struct FakeScoreStore {
    movies: Arc<FakeMovieStore>,
    scores: Mutex<BTreeMap<(DbId, DbId), f64>>,
}

impl FakeScoreStore {
    pub fn new(movies: Arc<FakeMovieStore>) -> Self {
        Self {
            movies,
            scores: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scores.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ScoreStore for FakeScoreStore {
    async fn record(&self, score: &Score) -> StoreResult<Movie> {
        let mut movies = self.movies.movies.lock().unwrap();
        let movie = movies
            .get_mut(&score.movie_id)
            .ok_or(StoreError::ReferenceNotFound(score.movie_id))?;

        let mut scores = self.scores.lock().unwrap();
        scores.insert((score.movie_id, score.user_id), score.value);
        let values: Vec<f64> = scores
            .iter()
            .filter(|((m, _), _)| *m == score.movie_id)
            .map(|(_, &value)| value)
            .collect();

        movie.score = mean_score(&values);
        movie.count = values.len() as i32;
        Ok(movie.clone())
    }
}
