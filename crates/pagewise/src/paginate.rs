// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use futures_util::stream::{self, Stream, TryStreamExt};

use crate::Page;

/// Where the next request starts from.
enum Cursor {
    First,
    Next(String),
    Exhausted,
}

/// Turns a paginated listing into a stream of its items.
///
/// `fetch` is called with `None` for the first page and with the previous page's token for every
/// page after that. It is not called again once a page without a token has been returned, or once
/// it has failed.
///
/// The returned stream is lazy: no request is issued until it is polled, and the next page is only
/// requested after every item of the current one has been yielded.
///
/// # Examples
///
/// ```
/// use futures::TryStreamExt;
/// use pagewise::{Page, paginate};
///
/// # futures::executor::block_on(async {
/// let mut requested = Vec::new();
/// let letters: Vec<char> = paginate(|token: Option<String>| {
///     requested.push(token.clone());
///     async move {
///         Ok::<_, std::io::Error>(match token {
///             None => Page::new(vec!['a'], Some("1".into())),
///             Some(_) => Page::last(vec!['b']),
///         })
///     }
/// })
/// .try_collect()
/// .await?;
///
/// assert_eq!(letters, ['a', 'b']);
/// assert_eq!(requested, [None, Some("1".to_string())]);
/// # Ok::<(), std::io::Error>(())
/// # });
/// ```
pub fn paginate<T, E, F, Fut>(mut fetch: F) -> impl Stream<Item = Result<T, E>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    stream::try_unfold((Cursor::First, 0_usize), move |(cursor, fetched)| {
        let request = match cursor {
            Cursor::First => Some(fetch(None)),
            Cursor::Next(token) => Some(fetch(Some(token))),
            Cursor::Exhausted => None,
        };

        async move {
            let Some(request) = request else {
                return Ok(None);
            };

            let (items, next_token) = match request.await {
                Ok(page) => page.into_parts(),
                Err(error) => return Err(error),
            };

            let page = fetched + 1;
            tracing::event!(
                name: "pagewise.page_fetched",
                tracing::Level::DEBUG,
                page,
                items = items.len(),
                has_more = next_token.is_some(),
                "page fetched",
            );

            let cursor = next_token.map_or(Cursor::Exhausted, Cursor::Next);
            Ok::<_, E>(Some((items, (cursor, page))))
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, E>)))
    .try_flatten()
}
