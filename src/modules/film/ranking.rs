use crate::modules::film::schema::FilmEntity;

/// Orders films by like count, most liked first, and keeps at most `count` of them.
///
/// The sort is stable, so films with equal like counts stay in the order they were given in
/// (creation order when fed from the store).
#[must_use]
pub fn top_liked(mut films: Vec<FilmEntity>, count: usize) -> Vec<FilmEntity> {
    films.sort_by(|a, b| b.likes.len().cmp(&a.likes.len()));
    films.truncate(count);
    films
}
