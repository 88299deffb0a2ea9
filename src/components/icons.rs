//! Centralized icon definitions (Bootstrap Icons).

use icondata::Icon;

pub const MENU: Icon = icondata::BsList;
pub const LOCATION: Icon = icondata::BsGeoAltFill;
pub const LANGUAGE: Icon = icondata::BsGlobe;
pub const EXTERNAL_LINK: Icon = icondata::BsBoxArrowUpRight;
