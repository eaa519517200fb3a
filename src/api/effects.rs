use log::debug;

use crate::api::{ApiError, MovieService};
use crate::core::action::{Action, Effect, Operation};

fn failed(operation: Operation, error: ApiError) -> Action {
    Action::RequestFailed {
        operation,
        message: error.to_string(),
    }
}

/// Runs one effect against the service and returns the action that reports
/// its outcome. `Effect::None` and `Effect::Quit` need no I/O and yield `None`.
pub async fn perform(effect: Effect, service: &dyn MovieService) -> Option<Action> {
    debug!("Performing {:?} via {}", effect, service.name());
    let action = match effect {
        Effect::None | Effect::Quit => return None,
        Effect::FetchMovies => match service.list_movies().await {
            Ok(movies) => Action::MoviesLoaded(movies),
            Err(e) => failed(Operation::Load, e),
        },
        Effect::CreateMovie(draft) => match service.create_movie(&draft).await {
            Ok(movie) => Action::MovieAdded(movie),
            Err(e) => failed(Operation::Add, e),
        },
        Effect::UpdateMovie(movie) => match service.update_movie(&movie).await {
            Ok(()) => Action::MovieUpdated(movie),
            Err(e) => failed(Operation::Edit, e),
        },
        Effect::DeleteMovie(id) => match service.delete_movie(id).await {
            Ok(()) => Action::MovieDeleted(id),
            Err(e) => failed(Operation::Delete(id), e),
        },
        Effect::DeleteAllMovies => match service.delete_all_movies().await {
            Ok(()) => Action::AllDeleted,
            Err(e) => failed(Operation::DeleteAll, e),
        },
    };
    Some(action)
}
