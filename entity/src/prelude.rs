pub use super::document::Entity as Document;
pub use super::inspection::Entity as Inspection;
pub use super::inspector::Entity as Inspector;
pub use super::layout_shop::Entity as LayoutShop;
pub use super::license::Entity as License;
pub use super::negotiation_message::Entity as NegotiationMessage;
pub use super::negotiation_room::Entity as NegotiationRoom;
pub use super::notification::Entity as Notification;
pub use super::shop_application::Entity as ShopApplication;
pub use super::station::Entity as Station;
pub use super::station_layout::Entity as StationLayout;
pub use super::user::Entity as User;
pub use super::vendor::Entity as Vendor;
pub use super::vendor_agreement::Entity as VendorAgreement;
pub use super::vendor_payment::Entity as VendorPayment;
