use std::sync::Arc;

use crate::{
    abstract_trait::{
        advertisement::DynAdvertisementClient, article::DynArticleClient, base::DynBaseClient,
        comment::DynCommentClient, feedback::DynFeedbackClient, friend_link::DynFriendLinkClient,
        image::DynImageClient, site_config::DynSiteConfigClient, user::DynUserClient,
        website::DynWebsiteClient,
    },
    client::RestClient,
    service::{
        AdvertisementClientService, ArticleClientService, BaseClientService,
        CommentClientService, FeedbackClientService, FriendLinkClientService, ImageClientService,
        SiteConfigClientService, UserClientService, WebsiteClientService,
    },
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub base: DynBaseClient,
    pub user: DynUserClient,
    pub article: DynArticleClient,
    pub comment: DynCommentClient,
    pub image: DynImageClient,
    pub friend_link: DynFriendLinkClient,
    pub advertisement: DynAdvertisementClient,
    pub feedback: DynFeedbackClient,
    pub website: DynWebsiteClient,
    pub site_config: DynSiteConfigClient,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("base", &"DynBaseClient")
            .field("user", &"DynUserClient")
            .field("article", &"DynArticleClient")
            .field("comment", &"DynCommentClient")
            .field("image", &"DynImageClient")
            .field("friend_link", &"DynFriendLinkClient")
            .field("advertisement", &"DynAdvertisementClient")
            .field("feedback", &"DynFeedbackClient")
            .field("website", &"DynWebsiteClient")
            .field("site_config", &"DynSiteConfigClient")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(client: Arc<RestClient>) -> Self {
        let base: DynBaseClient = Arc::new(BaseClientService::new(client.clone()));
        let user: DynUserClient = Arc::new(UserClientService::new(client.clone()));
        let article: DynArticleClient = Arc::new(ArticleClientService::new(client.clone()));
        let comment: DynCommentClient = Arc::new(CommentClientService::new(client.clone()));
        let image: DynImageClient = Arc::new(ImageClientService::new(client.clone()));
        let friend_link: DynFriendLinkClient =
            Arc::new(FriendLinkClientService::new(client.clone()));
        let advertisement: DynAdvertisementClient =
            Arc::new(AdvertisementClientService::new(client.clone()));
        let feedback: DynFeedbackClient = Arc::new(FeedbackClientService::new(client.clone()));
        let website: DynWebsiteClient = Arc::new(WebsiteClientService::new(client.clone()));
        let site_config: DynSiteConfigClient = Arc::new(SiteConfigClientService::new(client));

        Self {
            base,
            user,
            article,
            comment,
            image,
            friend_link,
            advertisement,
            feedback,
            website,
            site_config,
        }
    }
}
