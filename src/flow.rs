//! Cart and panel flows, written against a port so they run the same in the
//! browser and in native tests.
//!
//! Each flow awaits the server before touching the UI. A failed request
//! returns early with the `NetworkError` (the port has already toasted it),
//! so the panel and badge keep their prior state.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::net::types::{NetworkError, RequestSpec};
use crate::state::cart::CartMutation;
use crate::state::panels::Panel;
use crate::state::toast::Toast;

/// Side effects the flows need from the page.
///
/// Network methods report their own failures to the user; the flows only
/// decide what happens next.
#[allow(async_fn_in_trait)]
pub trait StorefrontPort {
    /// Issue a request, discarding the response body.
    async fn send(&self, request: RequestSpec) -> Result<(), NetworkError>;
    /// Re-fetch the cart panel markup and swap it in.
    async fn refresh_panel(&self) -> Result<(), NetworkError>;
    /// Re-fetch the cart quantity and update the badge; 0 on any failure.
    async fn refresh_badge(&self) -> u32;
    /// Fetch the login partial into the modal body.
    async fn load_login(&self) -> Result<(), NetworkError>;
    fn open_panel(&self, panel: Panel);
    fn close_panel(&self, panel: Panel);
    fn toast(&self, toast: Toast);
}

/// Refresh the cart panel, then open it.
pub async fn open_cart<P: StorefrontPort>(port: &P) -> Result<(), NetworkError> {
    port.refresh_panel().await?;
    port.open_panel(Panel::Cart);
    Ok(())
}

/// Load the login partial, then open the modal.
pub async fn open_login<P: StorefrontPort>(port: &P) -> Result<(), NetworkError> {
    port.load_login().await?;
    port.open_panel(Panel::Login);
    Ok(())
}

/// Apply a cart-panel mutation and bring the panel and badge up to date.
///
/// Closes the cart when it ends up empty. Returns the new quantity.
pub async fn mutate_cart<P: StorefrontPort>(
    port: &P,
    mutation: CartMutation,
    request: RequestSpec,
) -> Result<u32, NetworkError> {
    port.send(request).await?;
    port.refresh_panel().await?;
    let qty = port.refresh_badge().await;
    log::debug!("cart mutation {mutation:?} done, qty={qty}");

    port.toast(mutation.toast());
    if qty == 0 {
        port.close_panel(Panel::Cart);
    }
    Ok(qty)
}

/// Post an add-to-cart form, refresh panel and badge together, open the cart.
pub async fn add_to_cart<P: StorefrontPort>(
    port: &P,
    request: RequestSpec,
    product_name: &str,
) -> Result<u32, NetworkError> {
    port.send(request).await?;
    let (panel, qty) = futures::join!(port.refresh_panel(), port.refresh_badge());
    panel?;

    port.open_panel(Panel::Cart);
    port.toast(Toast::added_to_cart(product_name));
    Ok(qty)
}
