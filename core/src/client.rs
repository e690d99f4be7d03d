//! Client facade: session ownership and one method per API action.
//!
//! # Design
//! `TikTok` owns the [`Session`] and the [`Transport`]; every endpoint
//! method is a thin configuration step that builds one [`Request`], adds the
//! parameters specific to that action, and sends it. Endpoint methods catch
//! nothing — validation and transport errors reach the caller as raised.
//! Arbitrary endpoints outside the enumerated set go through [`request`].
//!
//! [`request`]: TikTok::request

use crate::decode::Decoded;
use crate::error::ClientError;
use crate::http::{Transport, TransportConfig};
use crate::request::Request;
use crate::session::Session;

/// Client for the TikTok REST proxy.
pub struct TikTok {
    session: Session,
    transport: Transport,
}

impl TikTok {
    /// Creates a client with default transport settings.
    pub fn new(debug: bool) -> Result<Self, ClientError> {
        Self::with_config(debug, TransportConfig::default())
    }

    /// Creates a client with explicit network configuration (outbound
    /// proxy, TLS verification, timeout).
    pub fn with_config(debug: bool, config: TransportConfig) -> Result<Self, ClientError> {
        Ok(Self {
            session: Session::new(debug),
            transport: Transport::new(&config)?,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_access_key(&mut self, access_key: &str) {
        self.session.set_access_key(access_key);
    }

    pub fn set_proxy(&mut self, proxy: &str) {
        self.session.set_proxy(proxy);
    }

    /// Points the client at a different API base, mainly for tests.
    pub fn set_api_base(&mut self, api_base: &str) {
        self.session.set_api_base(api_base);
    }

    /// Starts a request against an arbitrary endpoint path.
    pub fn request(&self, endpoint: &str) -> Result<Request<'_>, ClientError> {
        Request::new(&self.session, &self.transport, endpoint)
    }

    /// Logs in and makes `username` the session's active user for the
    /// default parameters of every following request.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Decoded, ClientError> {
        self.session.set_user(username);
        self.request("account/login")?
            .add_post("username", username)
            .add_post("password", password)
            .send()
    }

    /// Likes a video.
    pub fn like(&self, aweme_id: &str) -> Result<Decoded, ClientError> {
        self.request("media/like")?
            .add_param("aweme_id", aweme_id)
            .send()
    }

    /// Removes a like from a video.
    pub fn unlike(&self, aweme_id: &str) -> Result<Decoded, ClientError> {
        self.request("media/unlike")?
            .add_param("aweme_id", aweme_id)
            .send()
    }

    /// Fetches the view/engagement counters of a video.
    pub fn stats(&self, aweme_id: &str) -> Result<Decoded, ClientError> {
        self.request("media/stats")?
            .add_param("aweme_id", aweme_id)
            .send()
    }

    /// Comments on a video.
    pub fn comment(&self, aweme_id: &str, text: &str) -> Result<Decoded, ClientError> {
        self.request("media/comment")?
            .add_post("aweme_id", aweme_id)
            .add_post("text", text)
            .send()
    }

    /// Pages through the comments of a video.
    pub fn get_comments(&self, aweme_id: &str, cursor: u64) -> Result<Decoded, ClientError> {
        self.request("media/getComments")?
            .add_post("aweme_id", aweme_id)
            .add_post("cursor", cursor)
            .send()
    }

    /// Likes a comment.
    pub fn like_comment(&self, cid: &str, aweme_id: &str) -> Result<Decoded, ClientError> {
        self.request("media/likeComment")?
            .add_param("cid", cid)
            .add_param("aweme_id", aweme_id)
            .send()
    }

    /// Removes a like from a comment.
    pub fn unlike_comment(&self, cid: &str, aweme_id: &str) -> Result<Decoded, ClientError> {
        self.request("media/unlikeComment")?
            .add_param("cid", cid)
            .add_param("aweme_id", aweme_id)
            .send()
    }

    /// Follows a user. `channel_id` 3 is the "for you" tab.
    pub fn follow(&self, sec_user_id: &str, channel_id: i64) -> Result<Decoded, ClientError> {
        self.request("user/follow")?
            .add_param("from", 0i64)
            .add_param("from_pre", -1i64)
            .add_param("type", 1i64)
            .add_param("channel_id", channel_id)
            .add_param("sec_user_id", sec_user_id)
            .send()
    }

    /// Unfollows a user.
    pub fn unfollow(&self, sec_user_id: &str, channel_id: i64) -> Result<Decoded, ClientError> {
        self.request("user/unfollow")?
            .add_param("from", 0i64)
            .add_param("from_pre", -1i64)
            .add_param("type", 1i64)
            .add_param("channel_id", channel_id)
            .add_param("sec_user_id", sec_user_id)
            .send()
    }

    /// Pages through a user's video feed.
    pub fn get_user_feed(&self, sec_user_id: &str, cursor: u64) -> Result<Decoded, ClientError> {
        self.request("user/feed")?
            .add_param("sec_user_id", sec_user_id)
            .add_param("max_cursor", cursor)
            .send()
    }

    /// Pages through a user's followers.
    pub fn get_user_followers(
        &self,
        sec_user_id: &str,
        max_time: u64,
    ) -> Result<Decoded, ClientError> {
        self.request("user/followers")?
            .add_param("sec_user_id", sec_user_id)
            .add_param("max_time", max_time)
            .send()
    }

    /// Pages through the accounts a user follows.
    pub fn get_user_following(
        &self,
        sec_user_id: &str,
        max_time: u64,
    ) -> Result<Decoded, ClientError> {
        self.request("user/following")?
            .add_param("sec_user_id", sec_user_id)
            .add_param("max_time", max_time)
            .send()
    }

    /// Pages through the feed of a challenge (hashtag).
    pub fn get_challenge(&self, ch_id: &str, cursor: u64) -> Result<Decoded, ClientError> {
        self.request("media/getChallenge")?
            .add_param("ch_id", ch_id)
            .add_param("cursor", cursor)
            .send()
    }

    /// Pages through the feed of a music track.
    pub fn get_music(&self, music_id: &str, cursor: u64) -> Result<Decoded, ClientError> {
        self.request("media/getMusic")?
            .add_param("music_id", music_id)
            .add_param("cursor", cursor)
            .send()
    }

    /// Fetches a user's profile information.
    pub fn get_user_info_by_id(&self, sec_user_id: &str) -> Result<Decoded, ClientError> {
        self.request("user/info")?
            .add_param("sec_user_id", sec_user_id)
            .send()
    }

    /// Runs a general search.
    pub fn search(&self, query: &str, offset: u64, count: u64) -> Result<Decoded, ClientError> {
        self.request("search/general")?
            .add_post("keyword", query)
            .add_post("offset", offset)
            .add_post("count", count)
            .send()
    }
}
