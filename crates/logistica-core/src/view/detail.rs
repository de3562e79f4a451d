//! Order Detail
//!
//! Comments and tickets for one order, plus the comment form. Reloads are
//! joined: both lists update together or neither does. Writes are followed
//! by a full reload instead of a local append, so the lists always show
//! what the server has.

use uuid::Uuid;

use crate::domain::{Comment, NewComment, Ticket};
use crate::error::ApiResult;
use crate::service::ActivityService;

/// Author recorded on comments posted from the dashboard
pub const COMMENT_AUTHOR: &str = "Usuario";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderActivity {
    pub comments: Vec<Comment>,
    pub tickets: Vec<Ticket>,
}

/// Fetch comments and tickets concurrently; either failure fails both.
pub async fn fetch_activity<S>(service: &S, order_id: Uuid) -> ApiResult<OrderActivity>
where
    S: ActivityService + ?Sized,
{
    let (comments, tickets) =
        futures::try_join!(service.comments_for(order_id), service.tickets_for(order_id))?;
    Ok(OrderActivity { comments, tickets })
}

/// A comment the server accepted, and the reload that followed it
#[derive(Debug)]
pub struct Posted {
    pub comment: Comment,
    pub refreshed: ApiResult<OrderActivity>,
}

/// Post `body` and reload the order's activity.
pub async fn submit_comment<S>(service: &S, order_id: Uuid, body: String) -> ApiResult<Posted>
where
    S: ActivityService + ?Sized,
{
    let comment = service
        .add_comment(&NewComment {
            order_id,
            comment: body,
            user_name: COMMENT_AUTHOR.to_string(),
        })
        .await?;
    let refreshed = fetch_activity(service, order_id).await;
    Ok(Posted { comment, refreshed })
}

/// Everything the detail modal displays besides the order itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub comments: Vec<Comment>,
    pub tickets: Vec<Ticket>,
    /// Text in the comment input
    pub draft: String,
    /// A comment is in flight; the submit control is disabled
    pub submitting: bool,
    pub load_error: Option<String>,
    pub submit_error: Option<String>,
}

impl DetailState {
    /// Install a reload result. On failure both lists keep what they had.
    pub fn apply_activity(&mut self, result: ApiResult<OrderActivity>) {
        match result {
            Ok(activity) => {
                self.comments = activity.comments;
                self.tickets = activity.tickets;
                self.load_error = None;
            }
            Err(err) => {
                log::warn!("[DETAIL] Error loading comments and tickets: {}", err);
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Start a submission. Returns the trimmed body to send, or `None` when
    /// the draft is blank or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        let body = self.draft.trim();
        if body.is_empty() {
            return None;
        }
        let body = body.to_string();
        self.submitting = true;
        self.submit_error = None;
        Some(body)
    }

    /// Finish a submission. Success clears the draft; failure keeps it so
    /// the operator can retry.
    pub fn finish_submit(&mut self, result: ApiResult<Posted>) {
        self.submitting = false;
        match result {
            Ok(posted) => {
                self.draft.clear();
                self.apply_activity(posted.refreshed);
            }
            Err(err) => {
                log::warn!("[DETAIL] Error adding comment: {}", err);
                self.submit_error = Some(err.to_string());
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Enviando..."
        } else {
            "Enviar"
        }
    }

    pub fn comments_heading(&self) -> String {
        format!("Comentarios ({})", self.comments.len())
    }
}
