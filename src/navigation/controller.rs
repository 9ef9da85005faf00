//! Navigation controller backed by a Libadwaita navigation view.

use std::rc::Rc;

use {libadwaita::NavigationView, tracing::debug};

use crate::{
    i18n::Localizer,
    navigation::{NavigationRequest, Navigator},
    ui::views::PhotoDetailPage,
};

/// Pushes detail pages on a `NavigationView`.
///
/// Cloning is cheap; every clone drives the same navigation view.
#[derive(Clone)]
pub struct NavigationController {
    /// Navigation view receiving the pages.
    pub view: NavigationView,
    localizer: Rc<Localizer>,
}

impl NavigationController {
    /// Creates a new controller for `view`.
    ///
    /// # Arguments
    ///
    /// * `view` - Navigation view whose root page is already set up
    /// * `localizer` - Localizer used for page texts
    ///
    /// # Returns
    ///
    /// A new `NavigationController` instance.
    pub fn new(view: NavigationView, localizer: Rc<Localizer>) -> Self {
        Self { view, localizer }
    }
}

impl Navigator for NavigationController {
    fn navigate(&self, request: NavigationRequest) {
        let tag = request.route().path();

        // A page for the same route is already on the stack.
        if self.view.find_page(&tag).is_some() {
            debug!("NavigationController: popping to existing page '{tag}'");
            self.view.pop_to_tag(&tag);
            return;
        }

        debug!("NavigationController: pushing '{tag}'");
        let detail = PhotoDetailPage::new(&request, &self.localizer);
        self.view.push(&detail.page);
    }
}
