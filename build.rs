fn main() {
    // Messages are hand-written prost structs in src/proto; only the service
    // plumbing is generated, so no protoc is needed at build time.
    let racing = tonic_build::manual::Service::builder()
        .name("Racing")
        .package("racing")
        .method(
            tonic_build::manual::Method::builder()
                .name("list_races")
                .route_name("ListRaces")
                .input_type("crate::proto::racing::ListRacesRequest")
                .output_type("crate::proto::racing::ListRacesResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("get_race")
                .route_name("GetRace")
                .input_type("crate::proto::racing::GetRaceRequest")
                .output_type("crate::proto::racing::Race")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    let sports = tonic_build::manual::Service::builder()
        .name("Sports")
        .package("sports")
        .method(
            tonic_build::manual::Method::builder()
                .name("list_events")
                .route_name("ListEvents")
                .input_type("crate::proto::sports::ListEventsRequest")
                .output_type("crate::proto::sports::ListEventsResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("get_event")
                .route_name("GetEvent")
                .input_type("crate::proto::sports::GetEventRequest")
                .output_type("crate::proto::sports::Event")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[racing, sports]);
}
