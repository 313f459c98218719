//! Application deep links.
//!
//! The attribution service downstream matches on parameter names and their
//! order, so the query is always assembled as
//! `~campaign`, `~feature`, `page_type`, `page_id`, `initial_inner_page`.
//! Values are inserted verbatim.

use crate::{
    destinations::{AppDestination, InnerPage},
    error::{FormError, Result},
    validate::{TagRule, is_valid_tag},
};

/// Everything needed to build one deep link.
#[derive(Debug, Clone, Copy)]
pub struct AppLinkRequest<'a> {
    pub base_url: &'a str,
    pub campaign: &'a str,
    pub feature: Option<&'a str>,
    pub destination: &'a AppDestination,
    pub page_id: Option<&'a str>,
    pub inner_page: Option<InnerPage>,
}

/// Build an application deep link.
///
/// `page_id` is only emitted for destinations that need an id, and
/// `initial_inner_page` only for destinations with sub-pages.
///
/// # Errors
/// Returns an error if the campaign tag, feature or page id contain
/// characters outside `[A-Za-z0-9_-]`.
pub fn build_app_link(req: &AppLinkRequest<'_>) -> Result<String> {
    TagRule::Pattern.check(req.campaign)?;
    let feature = non_empty(req.feature);
    if let Some(feature) = feature
        && !is_valid_tag(feature)
    {
        return Err(FormError::InvalidFeature(feature.to_string()));
    }
    let page_id = non_empty(req.page_id).filter(|_| req.destination.needs_id);
    if let Some(id) = page_id
        && !is_valid_tag(id)
    {
        return Err(FormError::InvalidDestinationId(id.to_string()));
    }

    let mut params = vec![format!("~campaign={}", req.campaign)];
    if let Some(feature) = feature {
        params.push(format!("~feature={feature}"));
    }
    if let Some(page_type) = req.destination.page_type {
        params.push(format!("page_type={page_type}"));
    }
    if let Some(id) = page_id {
        params.push(format!("page_id={id}"));
    }
    if let Some(page) = req.inner_page.filter(|_| req.destination.has_sub_pages) {
        params.push(format!("initial_inner_page={page}"));
    }
    Ok(format!("{}?{}", req.base_url, params.join("&")))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations::find_app_destination;

    fn request(dest: &'static str) -> AppLinkRequest<'static> {
        AppLinkRequest {
            base_url: "https://axevil.app.link/igac",
            campaign: "post_100823",
            feature: None,
            destination: find_app_destination(dest).expect("known destination"),
            page_id: None,
            inner_page: None,
        }
    }

    #[test]
    fn idea_detail_with_id() {
        let req = AppLinkRequest {
            page_id: Some("42"),
            ..request("idea_detail")
        };
        assert_eq!(
            build_app_link(&req).unwrap(),
            "https://axevil.app.link/igac?~campaign=post_100823&page_type=idea&page_id=42"
        );
    }

    #[test]
    fn full_parameter_order() {
        let req = AppLinkRequest {
            feature: Some("stories"),
            page_id: Some("7"),
            inner_page: Some(InnerPage::Documents),
            ..request("investment_detail")
        };
        assert_eq!(
            build_app_link(&req).unwrap(),
            "https://axevil.app.link/igac?~campaign=post_100823&~feature=stories\
             &page_type=order&page_id=7&initial_inner_page=documents"
        );
    }

    #[test]
    fn home_only_carries_campaign() {
        assert_eq!(
            build_app_link(&request("home")).unwrap(),
            "https://axevil.app.link/igac?~campaign=post_100823"
        );
    }

    #[test]
    fn blank_id_is_omitted() {
        let req = AppLinkRequest {
            page_id: Some("  "),
            ..request("news_detail")
        };
        assert_eq!(
            build_app_link(&req).unwrap(),
            "https://axevil.app.link/igac?~campaign=post_100823&page_type=news"
        );
    }

    #[test]
    fn extras_ignored_without_flags() {
        let req = AppLinkRequest {
            page_id: Some("42"),
            inner_page: Some(InnerPage::Rounds),
            ..request("profile")
        };
        assert_eq!(
            build_app_link(&req).unwrap(),
            "https://axevil.app.link/igac?~campaign=post_100823&page_type=profile"
        );
    }

    #[test]
    fn rejects_unsafe_values() {
        let req = AppLinkRequest {
            campaign: "a b",
            ..request("home")
        };
        assert_eq!(
            build_app_link(&req),
            Err(FormError::InvalidTag("a b".into()))
        );
        let req = AppLinkRequest {
            feature: Some("x&y"),
            ..request("home")
        };
        assert_eq!(
            build_app_link(&req),
            Err(FormError::InvalidFeature("x&y".into()))
        );
        let req = AppLinkRequest {
            page_id: Some("4 2"),
            ..request("idea_detail")
        };
        assert_eq!(
            build_app_link(&req),
            Err(FormError::InvalidDestinationId("4 2".into()))
        );
    }
}
