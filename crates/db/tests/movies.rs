//! Repository integration tests.
//!
//! Each test runs against a fresh database provisioned by `#[sqlx::test]`
//! with the workspace migrations applied.

use assert_matches::assert_matches;
use reeldex_core::filters::Filters;
use reeldex_core::movie::SORT_SAFELIST;
use reeldex_core::runtime::Runtime;
use reeldex_db::models::movie::MovieInput;
use reeldex_db::repositories::MovieRepo;
use reeldex_db::DbError;
use sqlx::PgPool;

fn input(title: &str, year: i32, runtime: i32, genres: &[&str]) -> MovieInput {
    MovieInput {
        title: title.to_string(),
        year,
        runtime: Some(Runtime::new(runtime)),
        genres: Some(genres.iter().map(|s| s.to_string()).collect()),
    }
}

fn filters(page: i64, page_size: i64, sort: &str) -> Filters {
    Filters {
        page,
        page_size,
        sort: sort.to_string(),
        sort_safelist: SORT_SAFELIST,
    }
}

async fn seed(pool: &PgPool) -> Vec<i64> {
    let movies = [
        input("Moana", 2016, 107, &["animation", "adventure"]),
        input("Black Panther", 2018, 134, &["action", "adventure"]),
        input("Deadpool", 2016, 108, &["action", "comedy"]),
        input("The Breakfast Club", 1986, 97, &["drama"]),
    ];
    let mut ids = Vec::with_capacity(movies.len());
    for movie in &movies {
        ids.push(MovieRepo::create(pool, movie).await.unwrap().id);
    }
    ids
}

// -- create -----------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_assigns_id_and_initial_version(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &input("Moana", 2016, 107, &["animation"]))
        .await
        .unwrap();

    assert!(movie.id >= 1);
    assert_eq!(movie.version, 1);
    assert_eq!(movie.title, "Moana");
    assert_eq!(movie.year, 2016);
    assert_eq!(movie.runtime, Runtime::new(107));
    assert_eq!(movie.genres, vec!["animation"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_ids_are_monotonic(pool: PgPool) {
    let first = MovieRepo::create(&pool, &input("Moana", 2016, 107, &["animation"]))
        .await
        .unwrap();
    let second = MovieRepo::create(&pool, &input("Deadpool", 2016, 108, &["action"]))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

// -- get --------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_returns_the_stored_row(pool: PgPool) {
    let created = MovieRepo::create(&pool, &input("Moana", 2016, 107, &["animation"]))
        .await
        .unwrap();

    let fetched = MovieRepo::get(&pool, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_rejects_out_of_range_ids(pool: PgPool) {
    assert_matches!(MovieRepo::get(&pool, 0).await, Err(DbError::RecordNotFound));
    assert_matches!(MovieRepo::get(&pool, -1).await, Err(DbError::RecordNotFound));
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_absent_row_is_record_not_found(pool: PgPool) {
    assert_matches!(
        MovieRepo::get(&pool, 9999).await,
        Err(DbError::RecordNotFound)
    );
}

// -- update -----------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn update_replaces_fields_and_bumps_version(pool: PgPool) {
    let created = MovieRepo::create(&pool, &input("Moana", 2016, 107, &["animation"]))
        .await
        .unwrap();

    let updated = MovieRepo::update(
        &pool,
        created.id,
        &input("Moana", 2016, 110, &["animation", "family"]),
    )
    .await
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.version, 2);
    assert_eq!(updated.runtime, Runtime::new(110));
    assert_eq!(updated.genres, vec!["animation", "family"]);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_bumps_version_on_every_write(pool: PgPool) {
    let created = MovieRepo::create(&pool, &input("Moana", 2016, 107, &["animation"]))
        .await
        .unwrap();

    for expected in 2..=4 {
        let updated = MovieRepo::update(&pool, created.id, &input("Moana", 2016, 107, &["animation"]))
            .await
            .unwrap();
        assert_eq!(updated.version, expected);
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_absent_row_is_record_not_found(pool: PgPool) {
    assert_matches!(
        MovieRepo::update(&pool, 9999, &input("Moana", 2016, 107, &["animation"])).await,
        Err(DbError::RecordNotFound)
    );
}

// -- delete -----------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn delete_removes_the_row_exactly_once(pool: PgPool) {
    let created = MovieRepo::create(&pool, &input("Moana", 2016, 107, &["animation"]))
        .await
        .unwrap();

    MovieRepo::delete(&pool, created.id).await.unwrap();
    assert_matches!(
        MovieRepo::get(&pool, created.id).await,
        Err(DbError::RecordNotFound)
    );
    assert_matches!(
        MovieRepo::delete(&pool, created.id).await,
        Err(DbError::RecordNotFound)
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_rejects_out_of_range_ids(pool: PgPool) {
    assert_matches!(
        MovieRepo::delete(&pool, 0).await,
        Err(DbError::RecordNotFound)
    );
}

// -- list -------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_returns_everything_with_no_filters(pool: PgPool) {
    let ids = seed(&pool).await;

    let movies = MovieRepo::list(&pool, "", &[], &filters(1, 20, "id"))
        .await
        .unwrap();

    assert_eq!(movies.len(), ids.len());
    let listed: Vec<i64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(listed, ids);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_matches_title_words_case_insensitively(pool: PgPool) {
    seed(&pool).await;

    let movies = MovieRepo::list(&pool, "breakfast club", &[], &filters(1, 20, "id"))
        .await
        .unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "The Breakfast Club");

    let movies = MovieRepo::list(&pool, "MOANA", &[], &filters(1, 20, "id"))
        .await
        .unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Moana");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_requires_all_requested_genres(pool: PgPool) {
    seed(&pool).await;

    let action = vec!["action".to_string()];
    let movies = MovieRepo::list(&pool, "", &action, &filters(1, 20, "id"))
        .await
        .unwrap();
    assert_eq!(movies.len(), 2);

    let both = vec!["action".to_string(), "comedy".to_string()];
    let movies = MovieRepo::list(&pool, "", &both, &filters(1, 20, "id"))
        .await
        .unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Deadpool");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_unmatched_filters_yield_empty(pool: PgPool) {
    seed(&pool).await;

    let movies = MovieRepo::list(&pool, "nonexistent title words", &[], &filters(1, 20, "id"))
        .await
        .unwrap();
    assert!(movies.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_sorts_by_safelisted_columns(pool: PgPool) {
    seed(&pool).await;

    let movies = MovieRepo::list(&pool, "", &[], &filters(1, 20, "-year"))
        .await
        .unwrap();
    let years: Vec<i32> = movies.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![2018, 2016, 2016, 1986]);

    let movies = MovieRepo::list(&pool, "", &[], &filters(1, 20, "title"))
        .await
        .unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Black Panther", "Deadpool", "Moana", "The Breakfast Club"]
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_breaks_sort_ties_by_id(pool: PgPool) {
    let ids = seed(&pool).await;

    // Moana and Deadpool share 2016; ascending year must keep id order
    // within the tie.
    let movies = MovieRepo::list(&pool, "", &[], &filters(1, 20, "year"))
        .await
        .unwrap();
    let tied: Vec<i64> = movies.iter().filter(|m| m.year == 2016).map(|m| m.id).collect();
    assert_eq!(tied, vec![ids[0], ids[2]]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_windows_pages(pool: PgPool) {
    let ids = seed(&pool).await;

    let page_one = MovieRepo::list(&pool, "", &[], &filters(1, 3, "id"))
        .await
        .unwrap();
    assert_eq!(page_one.len(), 3);

    let page_two = MovieRepo::list(&pool, "", &[], &filters(2, 3, "id"))
        .await
        .unwrap();
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].id, ids[3]);

    let beyond = MovieRepo::list(&pool, "", &[], &filters(3, 3, "id"))
        .await
        .unwrap();
    assert!(beyond.is_empty());
}
