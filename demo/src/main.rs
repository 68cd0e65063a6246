fn main() {
    env_logger::init();
    trillium_smol::run(trillium_cookie_wrapper_demo::app());
}
