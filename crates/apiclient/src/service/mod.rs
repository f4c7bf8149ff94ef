mod advertisement;
mod article;
mod base;
mod comment;
mod feedback;
mod friend_link;
mod image;
mod site_config;
mod user;
mod website;

pub use self::advertisement::AdvertisementClientService;
pub use self::article::ArticleClientService;
pub use self::base::BaseClientService;
pub use self::comment::CommentClientService;
pub use self::feedback::FeedbackClientService;
pub use self::friend_link::FriendLinkClientService;
pub use self::image::ImageClientService;
pub use self::site_config::SiteConfigClientService;
pub use self::user::UserClientService;
pub use self::website::WebsiteClientService;
