//! Rent negotiation between a vendor and a station manager.

use entity::sea_orm_active_enums::{NegotiationStatus, NotificationKind, UserRole};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{application::ApplicationRepository, negotiation::NegotiationRepository},
    error::{auth::AuthError, AppError},
    model::{
        negotiation::{NegotiationMessage, NegotiationRoom, PostMessageParams, MAX_MESSAGE_LENGTH},
        notification::NewNotification,
        user::User,
    },
    service::notification,
    util::validate,
};

pub struct NegotiationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NegotiationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the room of an application with its messages in chronological order.
    ///
    /// Visible to both participants and to railway admins.
    pub async fn get_room(&self, actor: &User, application_id: i32) -> Result<NegotiationRoom, AppError> {
        let room = NegotiationRepository::new(self.db)
            .get_room_with_messages(application_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Negotiation not found".to_string()))?;

        if actor.role != UserRole::RailwayAdmin && !room.is_participant(actor.id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("negotiation for application {}", application_id),
            )
            .into());
        }

        Ok(room)
    }

    /// Posts a message, optionally carrying a rent offer that becomes the current offer.
    ///
    /// # Returns
    /// - `Ok(NegotiationMessage)` - The stored message
    /// - `Err(AppError::NotFound)` - Application has no negotiation
    /// - `Err(AppError::BadRequest)` - Room not open, empty or oversized content, or non-positive offer
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not a participant
    pub async fn post_message(
        &self,
        actor: &User,
        params: PostMessageParams,
    ) -> Result<NegotiationMessage, AppError> {
        let content = validate::required_text("Message", &params.content)?;
        if content.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Message must be at most {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }
        let offered_rent = params
            .offered_rent
            .map(|rent| validate::positive_amount("Offered rent", rent))
            .transpose()?;

        let txn = self.db.begin().await?;
        let repo = NegotiationRepository::new(&txn);

        let room = self.open_room(&repo, actor, params.application_id).await?;
        let counterpart = if actor.id == room.vendor_user_id {
            room.manager_user_id
        } else {
            room.vendor_user_id
        };

        let message = repo
            .add_message(room.id, actor.id, actor.role, content, offered_rent)
            .await?;
        if let Some(offer) = offered_rent {
            repo.set_offer(room, offer, actor.id).await?;
        }

        txn.commit().await?;

        let text = match offered_rent {
            Some(offer) => format!("{} offered Rs. {} per month.", actor.name, offer),
            None => format!("{} sent a message.", actor.name),
        };
        notification::deliver(
            self.db,
            vec![NewNotification::new(
                counterpart,
                NotificationKind::Info,
                "New negotiation message",
                text,
            )
            .link(format!("/applications/{}/negotiation", params.application_id))],
        )
        .await;

        Ok(message)
    }

    /// Accepts the current offer made by the other participant.
    ///
    /// The room becomes agreed and the application's final rent is set. A message
    /// recording the acceptance is appended to the thread.
    pub async fn accept_offer(&self, actor: &User, application_id: i32) -> Result<NegotiationRoom, AppError> {
        let txn = self.db.begin().await?;
        let repo = NegotiationRepository::new(&txn);

        let room = self.open_room(&repo, actor, application_id).await?;
        let (Some(offer), Some(offered_by)) = (room.current_offer, room.last_offer_by) else {
            return Err(AppError::BadRequest("There is no offer to accept".to_string()));
        };
        if offered_by == actor.id {
            return Err(AppError::BadRequest(
                "You cannot accept your own offer".to_string(),
            ));
        }

        repo.add_message(
            room.id,
            actor.id,
            actor.role,
            format!("Offer of Rs. {} per month accepted.", offer),
            None,
        )
        .await?;
        repo.agree(room, offer).await?;
        ApplicationRepository::new(&txn)
            .set_final_rent(application_id, offer)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Rent of {} agreed for application {}",
            offer,
            application_id
        );

        notification::deliver(
            self.db,
            vec![NewNotification::new(
                offered_by,
                NotificationKind::Success,
                "Offer accepted",
                format!("{} accepted your offer of Rs. {} per month.", actor.name, offer),
            )
            .link(format!("/applications/{}/negotiation", application_id))],
        )
        .await;

        self.get_room(actor, application_id).await
    }

    async fn open_room<C: sea_orm::ConnectionTrait>(
        &self,
        repo: &NegotiationRepository<'_, C>,
        actor: &User,
        application_id: i32,
    ) -> Result<entity::negotiation_room::Model, AppError> {
        let Some(room) = repo.find_room_by_application(application_id).await? else {
            return Err(AppError::NotFound("Negotiation not found".to_string()));
        };
        if room.vendor_user_id != actor.id && room.manager_user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("negotiation for application {}", application_id),
            )
            .into());
        }
        if room.status != NegotiationStatus::Open {
            return Err(AppError::BadRequest("Negotiation is closed".to_string()));
        }
        Ok(room)
    }
}
