//! Board level reads: listing, layout, version polling, archive and backlog.

use crate::{
    client::{HttpClient, Request},
    model::{BoardId, BoardVersion},
};

pub mod requests {
    use super::*;

    pub fn all() -> Request {
        Request::get("/Boards")
    }

    pub fn find(board_id: &BoardId) -> Request {
        Request::get(format!("/Boards/{board_id}"))
    }

    pub fn identifiers(board_id: &BoardId) -> Request {
        Request::get(format!("/Board/{board_id}/GetBoardIdentifiers"))
    }

    pub fn newer_if_exists(board_id: &BoardId, version: BoardVersion) -> Request {
        Request::get(format!(
            "/Board/{board_id}/BoardVersion/{version}/GetNewerIfExists"
        ))
    }

    pub fn history_since(board_id: &BoardId, version: BoardVersion) -> Request {
        Request::get(format!(
            "/Board/{board_id}/BoardVersion/{version}/GetBoardHistorySince"
        ))
    }

    pub fn archive(board_id: &BoardId) -> Request {
        Request::get(format!("/Board/{board_id}/Archive"))
    }

    pub fn backlog(board_id: &BoardId) -> Request {
        Request::get(format!("/Board/{board_id}/Backlog"))
    }
}

#[derive(Clone, Debug)]
pub struct BoardResource<C> {
    client: C,
}

impl<C: HttpClient> BoardResource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Every board the account can see.
    pub fn all(&self) -> Result<C::Response, C::Error> {
        requests::all().send(&self.client)
    }

    /// Full board: lanes with their cards.
    pub fn find(&self, board_id: &BoardId) -> Result<C::Response, C::Error> {
        requests::find(board_id).send(&self.client)
    }

    /// Card types, class of service, users and lanes valid on the board.
    pub fn identifiers(&self, board_id: &BoardId) -> Result<C::Response, C::Error> {
        requests::identifiers(board_id).send(&self.client)
    }

    /// The board, only if it has moved past `version`.
    pub fn newer_if_exists(
        &self,
        board_id: &BoardId,
        version: BoardVersion,
    ) -> Result<C::Response, C::Error> {
        requests::newer_if_exists(board_id, version).send(&self.client)
    }

    /// Events recorded after `version`.
    pub fn history_since(
        &self,
        board_id: &BoardId,
        version: BoardVersion,
    ) -> Result<C::Response, C::Error> {
        requests::history_since(board_id, version).send(&self.client)
    }

    pub fn archive(&self, board_id: &BoardId) -> Result<C::Response, C::Error> {
        requests::archive(board_id).send(&self.client)
    }

    pub fn backlog(&self, board_id: &BoardId) -> Result<C::Response, C::Error> {
        requests::backlog(board_id).send(&self.client)
    }
}
