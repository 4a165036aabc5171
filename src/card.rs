//! Card endpoints.
//!
//! Every operation maps to one fixed path template and verb. Ids are written
//! into path segments as given; only the WIP override comment of
//! [`CardResource::add_multiple`] is percent-encoded.

use serde_json::Value;

use crate::{
    client::{HttpClient, Request},
    model::{BoardId, CardBatch, CardId, CardPayload, ExternalId, LaneId, Position},
};

/// Request builders behind [`CardResource`]. Pure, so the same arguments
/// always produce the same request.
pub mod requests {
    use super::*;

    pub fn find(board_id: &BoardId, card_id: &CardId) -> Request {
        Request::get(format!("/Board/{board_id}/GetCard/{card_id}"))
    }

    pub fn find_by_external_id(board_id: &BoardId, external_id: &ExternalId) -> Request {
        Request::get(format!(
            "/Board/{board_id}/GetCardByExternalId/{external_id}"
        ))
    }

    pub fn history(board_id: &BoardId, card_id: &CardId) -> Request {
        Request::get(format!("/Card/History/{board_id}/{card_id}"))
    }

    pub fn delete(board_id: &BoardId, card_id: &CardId) -> Request {
        Request::post_empty(format!("/Board/{board_id}/DeleteCard/{card_id}"))
    }

    pub fn delete_multiple(board_id: &BoardId, card_ids: &[CardId]) -> Request {
        let ids = card_ids.iter().map(CardId::to_json).collect();
        Request::post(
            format!("/Board/{board_id}/DeleteCards"),
            Value::Array(ids),
        )
    }

    pub fn add(
        board_id: &BoardId,
        lane_id: &LaneId,
        position: Position,
        card: CardPayload,
    ) -> Request {
        Request::post(
            format!("/Board/{board_id}/AddCard/Lane/{lane_id}/Position/{position}"),
            Value::Object(card),
        )
    }

    pub fn add_multiple(board_id: &BoardId, wip_override_comment: &str, cards: CardBatch) -> Request {
        let comment = urlencoding::encode(wip_override_comment);
        let cards = cards.into_iter().map(Value::Object).collect();
        Request::post(
            format!("/Board/{board_id}/AddCards?wipOverrideComment={comment}"),
            Value::Array(cards),
        )
    }

    pub fn update(board_id: &BoardId, card: CardPayload) -> Request {
        Request::post(
            format!("/Board/{board_id}/UpdateCard/"),
            Value::Object(card),
        )
    }

    pub fn move_card(
        board_id: &BoardId,
        card_id: &CardId,
        lane_id: &LaneId,
        position: Position,
    ) -> Request {
        Request::post_empty(format!(
            "/Board/{board_id}/MoveCard/{card_id}/Lane/{lane_id}/Position/{position}"
        ))
    }
}

/// Card operations bound to a transport.
///
/// Holds no state besides the client; each method issues exactly one call
/// and returns the client's result unchanged.
#[derive(Clone, Debug)]
pub struct CardResource<C> {
    client: C,
}

impl<C: HttpClient> CardResource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn find(&self, board_id: &BoardId, card_id: &CardId) -> Result<C::Response, C::Error> {
        requests::find(board_id, card_id).send(&self.client)
    }

    pub fn find_by_external_id(
        &self,
        board_id: &BoardId,
        external_id: &ExternalId,
    ) -> Result<C::Response, C::Error> {
        requests::find_by_external_id(board_id, external_id).send(&self.client)
    }

    /// Event log of a single card.
    pub fn history(&self, board_id: &BoardId, card_id: &CardId) -> Result<C::Response, C::Error> {
        requests::history(board_id, card_id).send(&self.client)
    }

    pub fn delete(&self, board_id: &BoardId, card_id: &CardId) -> Result<C::Response, C::Error> {
        requests::delete(board_id, card_id).send(&self.client)
    }

    /// Deletes `card_ids` in one call. The ids are sent in the given order.
    pub fn delete_multiple(
        &self,
        board_id: &BoardId,
        card_ids: &[CardId],
    ) -> Result<C::Response, C::Error> {
        requests::delete_multiple(board_id, card_ids).send(&self.client)
    }

    pub fn add(
        &self,
        board_id: &BoardId,
        lane_id: &LaneId,
        position: Position,
        card: CardPayload,
    ) -> Result<C::Response, C::Error> {
        requests::add(board_id, lane_id, position, card).send(&self.client)
    }

    /// Adds a batch of cards, each naming its own `LaneId`.
    ///
    /// The service places cards in array order, and needs
    /// `wip_override_comment` whenever the batch breaks a lane's WIP limit.
    pub fn add_multiple(
        &self,
        board_id: &BoardId,
        wip_override_comment: &str,
        cards: CardBatch,
    ) -> Result<C::Response, C::Error> {
        requests::add_multiple(board_id, wip_override_comment, cards).send(&self.client)
    }

    /// Overwrites a card. `card` must carry the `Id` of the card to change;
    /// that is not checked here.
    pub fn update(&self, board_id: &BoardId, card: CardPayload) -> Result<C::Response, C::Error> {
        requests::update(board_id, card).send(&self.client)
    }

    pub fn move_card(
        &self,
        board_id: &BoardId,
        card_id: &CardId,
        lane_id: &LaneId,
        position: Position,
    ) -> Result<C::Response, C::Error> {
        requests::move_card(board_id, card_id, lane_id, position).send(&self.client)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::{testing::Recorder, Method};

    fn payload(v: Value) -> CardPayload {
        match v {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn find_gets_card_from_board() {
        let cards = CardResource::new(Recorder::new());
        let res = cards.find(&BoardId::from(101), &CardId::from(202)).unwrap();

        assert_eq!(cards.client().only_call(), Request::get("/Board/101/GetCard/202"));
        assert_eq!(res, json!({ "path": "/Board/101/GetCard/202" }));
    }

    #[test]
    fn find_by_external_id_gets_card() {
        let cards = CardResource::new(Recorder::new());
        cards
            .find_by_external_id(&BoardId::from(101), &ExternalId::from("JIRA-9"))
            .unwrap();

        assert_eq!(
            cards.client().only_call(),
            Request::get("/Board/101/GetCardByExternalId/JIRA-9")
        );
    }

    #[test]
    fn delete_multiple_keeps_id_order() {
        let cards = CardResource::new(Recorder::new());
        let ids = [CardId::from(3), CardId::from(1), CardId::from(2)];
        cards.delete_multiple(&BoardId::from(101), &ids).unwrap();

        assert_eq!(
            cards.client().only_call(),
            Request::post("/Board/101/DeleteCards", json!([3, 1, 2]))
        );
    }

    #[test]
    fn delete_posts_empty_object() {
        let cards = CardResource::new(Recorder::new());
        cards.delete(&BoardId::from(101), &CardId::from(202)).unwrap();

        let call = cards.client().only_call();
        assert_eq!(call.method(), Method::Post);
        assert_eq!(call.path(), "/Board/101/DeleteCard/202");
        assert_eq!(call.body(), Some(&json!({})));
    }

    #[test]
    fn add_posts_payload_to_lane_position() {
        let cards = CardResource::new(Recorder::new());
        let body = payload(json!({ "Title": "Fix login", "TypeId": 4 }));
        cards
            .add(&BoardId::from(101), &LaneId::from(7), Position(3), body)
            .unwrap();

        assert_eq!(
            cards.client().only_call(),
            Request::post(
                "/Board/101/AddCard/Lane/7/Position/3",
                json!({ "Title": "Fix login", "TypeId": 4 })
            )
        );
    }

    #[test]
    fn update_posts_payload() {
        let cards = CardResource::new(Recorder::new());
        let body = payload(json!({ "Id": 202, "Title": "t", "Description": "d" }));
        cards.update(&BoardId::from(101), body).unwrap();

        assert_eq!(
            cards.client().only_call(),
            Request::post(
                "/Board/101/UpdateCard/",
                json!({ "Id": 202, "Title": "t", "Description": "d" })
            )
        );
    }

    #[test]
    fn update_does_not_require_id() {
        let req = requests::update(&BoardId::from(1), payload(json!({ "Title": "t" })));
        assert_eq!(req.body(), Some(&json!({ "Title": "t" })));
    }

    #[test]
    fn add_multiple_encodes_comment_and_keeps_order() {
        let cards = CardResource::new(Recorder::new());
        let batch = vec![
            payload(json!({ "LaneId": 10, "Title": "first", "TypeId": 1 })),
            payload(json!({ "LaneId": 11, "Title": "second", "TypeId": 2 })),
        ];
        cards
            .add_multiple(&BoardId::from(101), "this is a comment", batch)
            .unwrap();

        assert_eq!(
            cards.client().only_call(),
            Request::post(
                "/Board/101/AddCards?wipOverrideComment=this%20is%20a%20comment",
                json!([
                    { "LaneId": 10, "Title": "first", "TypeId": 1 },
                    { "LaneId": 11, "Title": "second", "TypeId": 2 }
                ])
            )
        );
    }

    #[test]
    fn add_multiple_encodes_reserved_characters() {
        let req = requests::add_multiple(&BoardId::from(1), "a&b=c?/#%", Vec::new());
        assert_eq!(
            req.path(),
            "/Board/1/AddCards?wipOverrideComment=a%26b%3Dc%3F%2F%23%25"
        );
        assert_eq!(req.body(), Some(&json!([])));
    }

    #[test]
    fn history_gets_card_history() {
        let cards = CardResource::new(Recorder::new());
        cards.history(&BoardId::from(101), &CardId::from(202)).unwrap();

        assert_eq!(cards.client().only_call(), Request::get("/Card/History/101/202"));
    }

    #[test]
    fn move_card_posts_empty_object() {
        let cards = CardResource::new(Recorder::new());
        cards
            .move_card(
                &BoardId::from(101),
                &CardId::from(202),
                &LaneId::from(12),
                Position(0),
            )
            .unwrap();

        assert_eq!(
            cards.client().only_call(),
            Request::post_empty("/Board/101/MoveCard/202/Lane/12/Position/0")
        );
    }

    #[test]
    fn path_segments_are_not_encoded() {
        let req = requests::find(&BoardId::from("b 1"), &CardId::from("c/2"));
        assert_eq!(req.path(), "/Board/b 1/GetCard/c/2");
    }

    #[test]
    fn reads_are_repeatable() {
        let board = BoardId::from(5);
        let card = CardId::from(6);
        let ext = ExternalId::from("x");

        assert_eq!(requests::find(&board, &card), requests::find(&board, &card));
        assert_eq!(
            requests::find_by_external_id(&board, &ext),
            requests::find_by_external_id(&board, &ext)
        );
        assert_eq!(requests::history(&board, &card), requests::history(&board, &card));
    }

    #[test]
    fn repeated_reads_issue_identical_requests() {
        let cards = CardResource::new(Recorder::new());
        let board = BoardId::from(5);
        let card = CardId::from(6);
        let ext = ExternalId::from("x");

        for _ in 0..2 {
            cards.find(&board, &card).unwrap();
            cards.find_by_external_id(&board, &ext).unwrap();
            cards.history(&board, &card).unwrap();
        }

        let calls = cards.client().calls.borrow();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0..3], calls[3..6]);
        assert_eq!(calls[0], Request::get("/Board/5/GetCard/6"));
        assert_eq!(calls[1], Request::get("/Board/5/GetCardByExternalId/x"));
        assert_eq!(calls[2], Request::get("/Card/History/5/6"));
    }

    #[test]
    fn client_errors_pass_through() {
        let cards = CardResource::new(Recorder::failing("503 Service Unavailable"));
        let err = cards
            .move_card(&BoardId::from(1), &CardId::from(2), &LaneId::from(3), Position(0))
            .unwrap_err();

        assert_eq!(err, "503 Service Unavailable");
        assert_eq!(cards.client().calls.borrow().len(), 1);
    }
}
