pub mod placeorder;
