fn main() {
    multiversx_sc_meta_lib::cli_main::<flight_surety::AbiProvider>();
}
