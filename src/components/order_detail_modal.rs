//! Order Detail Modal
//!
//! Full order record with its tickets and comments. Comments and tickets
//! load when the modal opens and again after every posted comment.

use leptos::prelude::*;
use leptos::task::spawn_local;
use logistica_core::domain::{Comment, Order, Ticket};
use logistica_core::format::{format_currency, format_date, format_time_ago, MISSING};
use logistica_core::view::{
    fetch_activity, platform_tone, priority_tone, status_tone, submit_comment, ticket_status_tone, DetailState,
    ViewLifetime,
};

use super::Badge;
use crate::context::use_services;

fn or_missing(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| MISSING.to_string())
}

#[component]
pub fn OrderDetailModal(order: Order, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let services = StoredValue::new(use_services());
    let state = RwSignal::new(DetailState::default());

    // Requests still in flight when the modal closes are dropped
    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });
    let lifetime = StoredValue::new(lifetime);

    let order_id = order.id;

    let reload = move || {
        let services = services.get_value();
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let fetched = lifetime.run(fetch_activity(services.activity.as_ref(), order_id)).await;
            if let Some(result) = fetched {
                state.update(|s| s.apply_activity(result));
            }
        });
    };

    Effect::new(move |_| reload());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut body = None;
        state.update(|s| body = s.begin_submit());
        let Some(body) = body else {
            return;
        };

        let services = services.get_value();
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let posted = lifetime
                .run(submit_comment(services.activity.as_ref(), order_id, body))
                .await;
            if let Some(result) = posted {
                if let Ok(posted) = &result {
                    log::info!("[DETAIL] Comment {} added", posted.comment.id);
                }
                state.update(|s| s.finish_submit(result));
            }
        });
    };

    // ========================
    // Order fields
    // ========================

    let number = order.display_number().to_string();
    let platform = order.platform.label().to_string();
    let platform_class = platform_tone(&order.platform);
    let status = order.current_status.label();
    let status_class = status_tone(&order.current_status);

    let customer_name = or_missing(&order.customer_name);
    let customer_phone = or_missing(&order.customer_phone);
    let customer_email = or_missing(&order.customer_email);

    let shipping_type = order.shipping_type_label();
    let shipping_city = or_missing(&order.shipping_city);
    let shipping_address = or_missing(&order.shipping_address);

    let created = format_date(order.created_at.as_deref());
    let deadline = format_date(order.limite_despacho.as_deref());
    let deadline_class = if order.is_delayed { "deadline late" } else { "deadline" };
    let promised = order
        .promised_delivery
        .as_deref()
        .map(|raw| format_date(Some(raw)));

    let amount = format_currency(order.total_amount);
    let items = order
        .items_count
        .map(|count| count.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let late_by = order
        .is_delayed
        .then(|| format!("Atrasada por {}h", order.hours_delayed.unwrap_or(0.0)));

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">"Orden #" {number}</h2>
                        <div class="modal-badges">
                            <Badge tone=platform_class label=platform />
                            <Badge tone=status_class label=status />
                        </div>
                    </div>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="modal-body">
                    <div class="detail-grid">
                        <section class="detail-section">
                            <h3>"Información del Cliente"</h3>
                            <p><strong>"Nombre: "</strong>{customer_name}</p>
                            <p><strong>"Teléfono: "</strong>{customer_phone}</p>
                            <p><strong>"Email: "</strong>{customer_email}</p>
                        </section>

                        <section class="detail-section">
                            <h3>"Información de Envío"</h3>
                            <p><strong>"Tipo: "</strong>{shipping_type}</p>
                            <p><strong>"Ciudad: "</strong>{shipping_city}</p>
                            <p><strong>"Dirección: "</strong>{shipping_address}</p>
                        </section>

                        <section class="detail-section">
                            <h3>"Fechas Importantes"</h3>
                            <p><strong>"Creada: "</strong>{created}</p>
                            <p>
                                <strong>"Límite despacho: "</strong>
                                <span class=deadline_class>{deadline}</span>
                            </p>
                            {promised.map(|promised| view! {
                                <p><strong>"Entrega prometida: "</strong>{promised}</p>
                            })}
                        </section>

                        <section class="detail-section">
                            <h3>"Detalles"</h3>
                            <p><strong>"Monto: "</strong>{amount}</p>
                            <p><strong>"Items: "</strong>{items}</p>
                            {late_by.map(|late_by| view! { <p class="late-by">{late_by}</p> })}
                        </section>
                    </div>

                    {move || state.with(|s| s.load_error.clone()).map(|reason| view! {
                        <div class="load-failed">
                            <p class="load-failed-message">"No se pudieron cargar comentarios y tickets"</p>
                            <p class="load-failed-reason">{reason}</p>
                            <button class="retry-btn" on:click=move |_| reload()>"Reintentar"</button>
                        </div>
                    })}

                    {move || {
                        let tickets = state.with(|s| s.tickets.clone());
                        (!tickets.is_empty()).then(|| view! { <TicketList tickets=tickets /> })
                    }}

                    <section class="comments">
                        <h3>{move || state.with(|s| s.comments_heading())}</h3>

                        <form class="comment-form" on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Agregar comentario..."
                                prop:value=move || state.with(|s| s.draft.clone())
                                on:input=move |ev| state.update(|s| s.set_draft(event_target_value(&ev)))
                            />
                            <button type="submit" disabled=move || state.with(|s| s.submitting)>
                                {move || state.with(|s| s.submit_label())}
                            </button>
                        </form>

                        {move || state.with(|s| s.submit_error.clone()).map(|reason| view! {
                            <p class="submit-error">"No se pudo agregar el comentario: " {reason}</p>
                        })}

                        {move || {
                            let comments = state.with(|s| s.comments.clone());
                            if comments.is_empty() {
                                view! { <p class="empty-comments">"No hay comentarios"</p> }.into_any()
                            } else {
                                view! { <CommentList comments=comments /> }.into_any()
                            }
                        }}
                    </section>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TicketList(tickets: Vec<Ticket>) -> impl IntoView {
    view! {
        <section class="tickets">
            <h3>"Tickets Asociados"</h3>
            {tickets
                .into_iter()
                .map(|ticket| {
                    let tone = ticket_status_tone(&ticket.status);
                    let status = ticket.status.as_str().to_uppercase();
                    let priority = ticket.priority.map(|priority| {
                        let tone = priority_tone(&priority);
                        view! { <Badge tone=tone label=priority.as_str().to_uppercase() /> }
                    });
                    view! {
                        <div class="ticket">
                            <div>
                                <p class="ticket-title">{ticket.title}</p>
                                <p class="ticket-description">{ticket.description}</p>
                            </div>
                            <div class="ticket-badges">
                                {priority}
                                <Badge tone=tone label=status />
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn CommentList(comments: Vec<Comment>) -> impl IntoView {
    view! {
        <div class="comment-list">
            {comments
                .into_iter()
                .map(|comment| {
                    let posted_at = format_date(comment.created_at.as_deref());
                    let posted_ago = format_time_ago(comment.created_at.as_deref());
                    view! {
                        <div class="comment">
                            <div class="comment-header">
                                <span class="comment-author">{comment.user_name}</span>
                                <span class="comment-time" title=posted_ago>{posted_at}</span>
                            </div>
                            <p class="comment-body">{comment.comment}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
