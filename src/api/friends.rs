// ABOUTME: Friend endpoints: friend list, leaderboard and invitations
// ABOUTME: Invitations are always sent and answered as the authorized user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::requests::{FriendInvitation, InvitationBody, InvitationResponse};
use crate::client::{ApiResponse, FitbitClient};
use crate::constants::CURRENT_USER;
use crate::errors::FitbitResult;
use serde_json::Value;

impl FitbitClient {
    /// Friends of the user
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn friends(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/friends.json"));
        self.get(&url).await
    }

    /// Step leaderboard of the user and their friends
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn friends_leaderboard(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/friends/leaderboard.json"));
        self.get(&url).await
    }

    /// Invite someone to become a friend of the authorized user
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn invite_friend(&mut self, invitation: &FriendInvitation) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{CURRENT_USER}/friends/invitations.json"));
        self.post(&url, Some(&InvitationBody::from(invitation))).await
    }

    /// Pending invitations for the user
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn friend_invitations(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/friends/invitations.json"));
        self.get(&url).await
    }

    /// Accept or reject an invitation sent by `from_user_id`
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn respond_to_friend_invitation(&mut self, from_user_id: &str, accept: bool) -> FitbitResult<Value> {
        let url = self.resource_url(&format!(
            "user/{CURRENT_USER}/friends/invitations/{from_user_id}.json"
        ));
        self.post(&url, Some(&InvitationResponse { accept })).await
    }
}
